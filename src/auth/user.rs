//! Signed-in user model and session (de)serialization.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::nav::ADMIN_ROLE;

/// Browser storage key holding the signed-in user as JSON.
pub const SESSION_KEY: &str = "user";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub username: Option<String>,
    /// Role name as issued by the backend. Only `"admin"` is privileged.
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("stored session is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("browser storage is unavailable")]
    StorageUnavailable,
}

/// Decode a stored session value.
pub fn decode_session(raw: &str) -> Result<User, SessionError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn encode_session(user: &User) -> Result<String, SessionError> {
    Ok(serde_json::to_string(user)?)
}
