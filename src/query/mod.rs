//! Pure queries and derivations over the [`crate::DataStore`] collections.
//! Every function is a single pass over the relevant collection; the dataset
//! is small and fixed, so no index structures are kept.

pub mod attendance;
pub mod dashboard;
pub mod late;
pub mod leave;
pub mod roster;
