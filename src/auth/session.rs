use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::Role;

/// The authenticated user, as persisted to the durable slot. Passwords are
/// never part of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// One file holding one serialized [`Session`]. The payload is a small atomic
/// blob; a single read or write per call is the whole persistence story.
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Missing, unreadable, or corrupt data all read as "not logged in".
    pub fn load(&self) -> Option<Session> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "Discarding corrupt session blob");
                None
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        let raw = serde_json::to_string(session).context("serialize session")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("write session blob to {}", self.path.display()))
    }

    /// Idempotent; clearing an already-empty slot is fine.
    pub fn clear(&self) {
        let _ = fs::remove_file(&self.path);
    }
}
