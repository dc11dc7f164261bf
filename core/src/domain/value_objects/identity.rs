//! Resolved caller identity.

use uuid::Uuid;

/// Who a session token resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    /// A valid session bound to this user
    User(Uuid),
    /// No token, or an unknown, revoked or expired one
    Anonymous,
}

impl Identity {
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Identity::User(id) => Some(*id),
            Identity::Anonymous => None,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Identity::Anonymous)
    }
}
