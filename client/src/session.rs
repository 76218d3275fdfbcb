use std::fs;
use std::path::PathBuf;

use shared::SessionUser;
use tracing::{debug, warn};

use crate::errors::{ClientError, Result};

/// File name of the persisted session record inside the data directory.
const USER_RECORD: &str = "user.json";

/// Reads the currently authenticated user from persisted local state.
///
/// The record is written at login time by the outer application; the core
/// only ever reads it. A missing or malformed record is reported as
/// [`ClientError::AuthenticationRequired`] so callers can check the session
/// before running any dependent logic.
#[derive(Debug, Clone)]
pub struct SessionReader {
    data_dir: PathBuf,
}

impl SessionReader {
    /// Create a reader over an explicit data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create a reader over the platform data directory used by the desktop
    /// builds. Returns `None` when the platform exposes no such directory.
    pub fn from_default_location() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join("bill-tracker")))
    }

    /// Path of the session record this reader consults.
    pub fn user_record_path(&self) -> PathBuf {
        self.data_dir.join(USER_RECORD)
    }

    /// The currently authenticated user.
    ///
    /// Any failure to produce a usable identity (no record, unreadable or
    /// malformed JSON, empty email) collapses into
    /// [`ClientError::AuthenticationRequired`].
    pub fn current_user(&self) -> Result<SessionUser> {
        let path = self.user_record_path();

        let raw = fs::read_to_string(&path).map_err(|e| {
            debug!("No session record at {}: {}", path.display(), e);
            ClientError::AuthenticationRequired
        })?;

        let user: SessionUser = serde_json::from_str(&raw).map_err(|e| {
            warn!("Malformed session record at {}: {}", path.display(), e);
            ClientError::AuthenticationRequired
        })?;

        if user.email.trim().is_empty() {
            warn!("Session record carries no email, treating as unauthenticated");
            return Err(ClientError::AuthenticationRequired);
        }

        debug!("Session user: {} ({})", user.email, user.role);
        Ok(user)
    }
}
