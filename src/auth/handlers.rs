use std::thread;
use std::time::Duration;

use tracing::{debug, error, info};
use uuid::Uuid;

use crate::auth::principal::{MOCK_PRINCIPALS, Principal};
use crate::auth::session::{Session, SessionStorage};
use crate::config::Config;
use crate::error::{AmsError, Result};
use crate::model::Role;

/// Authenticates principals and owns the durable session slot.
pub struct AuthService {
    principals: Vec<Principal>,
    storage: SessionStorage,
    latency: Duration,
}

impl AuthService {
    pub fn new(config: &Config) -> Self {
        Self {
            principals: MOCK_PRINCIPALS.clone(),
            storage: SessionStorage::new(config.session_path.clone()),
            latency: Duration::from_millis(config.auth_latency_ms),
        }
    }

    /// Fixture constructor for tests.
    pub fn with_principals(principals: Vec<Principal>, storage: SessionStorage) -> Self {
        Self {
            principals,
            storage,
            latency: Duration::ZERO,
        }
    }

    pub fn login(&self, email: &str, password: &str) -> Result<Session> {
        info!(email, "Login request received");
        self.simulate_latency();

        if email.trim().is_empty() || password.is_empty() {
            info!("Validation failed: empty email or password");
            return Err(AmsError::InvalidCredentials);
        }

        debug!("Looking up principal");

        let principal = self
            .principals
            .iter()
            .find(|p| p.email == email && p.password == password)
            .ok_or_else(|| {
                info!("Invalid credentials: no matching principal");
                AmsError::InvalidCredentials
            })?;

        let session = Session {
            id: principal.id.clone(),
            name: principal.name.clone(),
            email: principal.email.clone(),
            role: principal.role,
        };

        // Persist failure keeps the login result; the session just won't
        // survive a restart.
        if let Err(e) = self.storage.save(&session) {
            error!(error = %e, "Failed to persist session");
        }

        info!(role = %session.role, "Login successful");
        Ok(session)
    }

    /// Creates a session for a brand-new principal. The new account is not
    /// appended to the login list, so after a logout it cannot sign back in
    /// within a fresh process. Known limitation of the demo dataset.
    pub fn signup(&self, name: &str, email: &str, _password: &str, role: Role) -> Result<Session> {
        info!(email, "Signup request received");
        self.simulate_latency();

        if self.principals.iter().any(|p| p.email == email) {
            info!("Signup rejected: email already registered");
            return Err(AmsError::DuplicateEmail);
        }

        let session = Session {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
        };

        if let Err(e) = self.storage.save(&session) {
            error!(error = %e, "Failed to persist session");
        }

        info!(role = %session.role, "Signup successful");
        Ok(session)
    }

    /// Idempotent; logging out with no session is a no-op.
    pub fn logout(&self) {
        self.storage.clear();
        info!("Logged out");
    }

    /// Re-reads the durable slot on every call so a restarted process picks
    /// up the previous login.
    pub fn current_session(&self) -> Option<Session> {
        self.storage.load()
    }

    /// Session for a protected query, or [`AmsError::SessionAbsent`]. Role
    /// checks stay with [`super::authorize`].
    pub fn require_session(&self) -> Result<Session> {
        self.current_session().ok_or(AmsError::SessionAbsent)
    }

    fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
    }
}
