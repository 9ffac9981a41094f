use derive_more::{Display, Error};

/// Failure kinds of the core surface. Lookups that can legitimately come up
/// empty (rates, enrichment joins) resolve to defaults instead and never
/// appear here.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum AmsError {
    #[display(fmt = "Invalid credentials")]
    InvalidCredentials,

    #[display(fmt = "User with this email already exists")]
    DuplicateEmail,

    #[display(fmt = "Leave request not found")]
    NotFound,

    /// Protected query attempted with no active session. Callers treat this
    /// as an authorization denial, not a crash.
    #[display(fmt = "Not authenticated")]
    SessionAbsent,
}

pub type Result<T> = std::result::Result<T, AmsError>;
