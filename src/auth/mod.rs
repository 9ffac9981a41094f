pub mod handlers;
pub mod principal;
pub mod session;

pub use handlers::AuthService;
pub use session::{Session, SessionStorage};

use crate::model::Role;

/// Role gate for protected views. An empty `allowed` slice means any
/// authenticated user; no session is always a denial.
pub fn authorize(session: Option<&Session>, allowed: &[Role]) -> bool {
    match session {
        Some(s) => allowed.is_empty() || allowed.contains(&s.role),
        None => false,
    }
}
