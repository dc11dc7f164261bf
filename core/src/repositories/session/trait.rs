//! Session repository trait defining the interface for session persistence.

use async_trait::async_trait;

use crate::domain::entities::session::Session;
use crate::errors::DomainError;

/// Repository trait for Session persistence operations
///
/// Sessions are keyed by the digest of their token; raw tokens never reach
/// the repository.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Store a new session
    async fn save(&self, session: Session) -> Result<Session, DomainError>;

    /// Find a session by token digest
    async fn find(&self, token_hash: &str) -> Result<Option<Session>, DomainError>;

    /// Remove a session by token digest
    ///
    /// # Returns
    /// * `Ok(true)` - Session removed
    /// * `Ok(false)` - No such session (not an error)
    async fn remove(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Remove every expired session, returning how many were removed
    async fn purge_expired(&self) -> Result<usize, DomainError>;
}
