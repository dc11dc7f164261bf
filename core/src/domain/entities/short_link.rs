//! Short link entity mapping a public code to a destination URL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A short code owned by one user
///
/// `code` and `owner_id` never change after creation; only the destination
/// may be replaced, and only by the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLink {
    /// Public short code
    pub code: String,

    /// URL the code redirects to
    pub destination_url: String,

    /// User that created the link
    pub owner_id: Uuid,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShortLink {
    pub fn new(code: String, destination_url: String, owner_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            code,
            destination_url,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `user_id` owns this link
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }

    /// Replace the destination, keeping code and owner
    pub fn set_destination(&mut self, destination_url: String) {
        self.destination_url = destination_url;
        self.updated_at = Utc::now();
    }
}
