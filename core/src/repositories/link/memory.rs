//! In-memory implementation of LinkRepository

use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::short_link::ShortLink;
use crate::errors::{DomainError, LinkError};

use super::r#trait::LinkRepository;

/// Process-lifetime link table keyed by code
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: RwLock<HashMap<String, ShortLink>>,
}

impl InMemoryLinkRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl InMemoryLinkRepository {
    pub(crate) async fn contains(&self, code: &str) -> bool {
        self.links.read().await.contains_key(code)
    }

    pub(crate) async fn len(&self) -> usize {
        self.links.read().await.len()
    }
}

fn owned_entry<'a>(
    links: &'a mut HashMap<String, ShortLink>,
    code: &str,
    owner_id: Uuid,
) -> Result<&'a mut ShortLink, DomainError> {
    let link = links
        .get_mut(code)
        .ok_or_else(|| DomainError::link_not_found(code))?;
    if !link.is_owned_by(owner_id) {
        return Err(DomainError::Link(LinkError::Forbidden));
    }
    Ok(link)
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, DomainError> {
        let links = self.links.read().await;
        Ok(links.get(code).cloned())
    }

    async fn insert_if_absent(&self, link: ShortLink) -> Result<bool, DomainError> {
        let mut links = self.links.write().await;
        match links.entry(link.code.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(link);
                Ok(true)
            }
        }
    }

    async fn update_destination(
        &self,
        code: &str,
        owner_id: Uuid,
        destination_url: String,
    ) -> Result<ShortLink, DomainError> {
        let mut links = self.links.write().await;
        let link = owned_entry(&mut links, code, owner_id)?;
        link.set_destination(destination_url);
        Ok(link.clone())
    }

    async fn delete_owned(&self, code: &str, owner_id: Uuid) -> Result<ShortLink, DomainError> {
        let mut links = self.links.write().await;
        owned_entry(&mut links, code, owner_id)?;
        links
            .remove(code)
            .ok_or_else(|| DomainError::link_not_found(code))
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<ShortLink>, DomainError> {
        let links = self.links.read().await;
        Ok(links
            .values()
            .filter(|link| link.is_owned_by(owner_id))
            .cloned()
            .collect())
    }
}
