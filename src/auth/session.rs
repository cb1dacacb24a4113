// src/auth/session.rs
//
// Persisted session state: the bearer token and the signed-in user profile.
// This is the only state shared across commands; writes happen solely at
// login/logout, so last-write-wins is acceptable.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::models::User;
use crate::common::ClientError;

/// Current session: anonymous by default
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// File-backed session store with explicit load/set/clear lifecycle.
///
/// Loaded once at startup; a missing or unreadable file yields the anonymous
/// session rather than an error, so a corrupt session file never locks the
/// user out of `login`.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Session {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                debug!(path = %self.path.display(), error = %e, "session file unreadable, starting anonymous");
                Session::default()
            }),
            Err(_) => Session::default(),
        }
    }

    pub fn set(&self, token: String, user: Option<User>) -> Result<Session, ClientError> {
        let session = Session {
            token: Some(token),
            user,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ClientError::Session(format!("creating {}: {}", parent.display(), e)))?;
        }
        let raw = serde_json::to_string_pretty(&session)
            .map_err(|e| ClientError::Session(e.to_string()))?;
        fs::write(&self.path, raw)
            .map_err(|e| ClientError::Session(format!("writing {}: {}", self.path.display(), e)))?;
        Ok(session)
    }

    pub fn clear(&self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::Session(format!(
                "removing {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
