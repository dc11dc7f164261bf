//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of a successful login or sign-up
///
/// The token is the opaque session credential handed to the client; it is the
/// only place the raw token exists after issuance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Authenticated user
    pub user_id: Uuid,

    /// Opaque session token
    pub session_token: String,

    /// Session lifetime in seconds, `None` when sessions last until logout
    pub expires_in: Option<i64>,
}

impl AuthResponse {
    pub fn new(user_id: Uuid, session_token: String, expires_in: Option<i64>) -> Self {
        Self {
            user_id,
            session_token,
            expires_in,
        }
    }
}
