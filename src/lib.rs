pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod query;
pub mod seed;
pub mod store;

pub use config::Config;
pub use error::AmsError;
pub use store::DataStore;
