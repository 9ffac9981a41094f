use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    /// Location of the durable session blob.
    pub session_path: PathBuf,

    /// Artificial login/signup delay in milliseconds, for UI testing only.
    /// Zero disables it.
    pub auth_latency_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            session_path: env::var("AMS_SESSION_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("ams_session.json")),
            auth_latency_ms: env::var("AMS_AUTH_LATENCY_MS")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .unwrap_or(0),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_path: PathBuf::from("ams_session.json"),
            auth_latency_ms: 0,
        }
    }
}
