//! Server-side session record binding a token digest to a user.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session entity
///
/// Only the SHA-256 digest of the client-held token is stored, so a leaked
/// session table cannot be replayed as cookies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Hex-encoded SHA-256 digest of the session token
    pub token_hash: String,

    /// User the session authenticates
    pub user_id: Uuid,

    pub created_at: DateTime<Utc>,

    /// Expiry, if sessions have a maximum age
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(token_hash: String, user_id: Uuid, max_age: Option<Duration>) -> Self {
        let now = Utc::now();
        Self {
            token_hash,
            user_id,
            created_at: now,
            expires_at: max_age.map(|age| now + age),
        }
    }

    /// Checks if the session is past its maximum age
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|expires_at| Utc::now() >= expires_at)
    }
}
