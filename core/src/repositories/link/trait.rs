//! Link repository trait defining the interface for short link persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::short_link::ShortLink;
use crate::errors::DomainError;

/// Repository trait for ShortLink persistence operations
///
/// Mutations that depend on the current state of an entry (insert when the
/// code is free, update or delete when the requester owns it) are single
/// atomic operations so concurrent requests cannot interleave between the
/// check and the write.
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Find a link by its code
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, DomainError>;

    /// Insert a link unless its code is already taken
    ///
    /// # Returns
    /// * `Ok(true)` - Link stored
    /// * `Ok(false)` - Code already in use; nothing was written
    async fn insert_if_absent(&self, link: ShortLink) -> Result<bool, DomainError>;

    /// Replace the destination of a link owned by `owner_id`
    ///
    /// # Returns
    /// * `Ok(ShortLink)` - The updated link
    /// * `Err(LinkError::NotFound)` - Unknown code
    /// * `Err(LinkError::Forbidden)` - Link owned by someone else; nothing was written
    async fn update_destination(
        &self,
        code: &str,
        owner_id: Uuid,
        destination_url: String,
    ) -> Result<ShortLink, DomainError>;

    /// Remove a link owned by `owner_id`
    ///
    /// # Returns
    /// * `Ok(ShortLink)` - The removed link
    /// * `Err(LinkError::NotFound)` - Unknown code
    /// * `Err(LinkError::Forbidden)` - Link owned by someone else; nothing was removed
    async fn delete_owned(&self, code: &str, owner_id: Uuid) -> Result<ShortLink, DomainError>;

    /// All links created by `owner_id`, in no particular order
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<ShortLink>, DomainError>;
}
