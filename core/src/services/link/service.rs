//! Link service implementation

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::short_link::ShortLink;
use crate::errors::{DomainError, DomainResult, LinkError, ValidationError};
use crate::repositories::{LinkRepository, UserRepository};
use crate::services::code::{CodeGenerator, RandomCodeGenerator};

use super::config::LinkServiceConfig;

/// Service managing short links and their ownership
pub struct LinkService<L, U>
where
    L: LinkRepository,
    U: UserRepository,
{
    /// Link storage
    link_repository: Arc<L>,
    /// Used to confirm the owner of a new link exists
    user_repository: Arc<U>,
    /// Source of candidate codes
    generator: Arc<dyn CodeGenerator>,
    config: LinkServiceConfig,
}

impl<L, U> LinkService<L, U>
where
    L: LinkRepository,
    U: UserRepository,
{
    /// Create a link service drawing random codes of the configured length
    pub fn new(link_repository: Arc<L>, user_repository: Arc<U>, config: LinkServiceConfig) -> Self {
        let generator = Arc::new(RandomCodeGenerator::new(config.code_length));
        Self::with_generator(link_repository, user_repository, generator, config)
    }

    /// Create a link service with a custom code source
    pub fn with_generator(
        link_repository: Arc<L>,
        user_repository: Arc<U>,
        generator: Arc<dyn CodeGenerator>,
        config: LinkServiceConfig,
    ) -> Self {
        Self {
            link_repository,
            user_repository,
            generator,
            config,
        }
    }

    /// Create a new short link owned by `owner_id`
    ///
    /// Candidate codes are drawn until one is free. The existence check and
    /// the insert are a single repository step, so two concurrent creations
    /// can never end up sharing a code.
    ///
    /// # Errors
    ///
    /// * `ValidationError::RequiredField` - blank destination
    /// * `ValidationError::ControlCharacters` - destination unusable as a `Location`
    /// * `DomainError::NotFound` - unknown owner
    /// * `LinkError::GenerationExhausted` - every draw collided
    pub async fn create(&self, owner_id: Uuid, destination_url: &str) -> DomainResult<ShortLink> {
        check_destination(destination_url)?;

        if self.user_repository.find_by_id(owner_id).await?.is_none() {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        let attempts = self.config.max_generation_attempts;
        for attempt in 1..=attempts {
            let code = self.generator.generate();
            let link = ShortLink::new(code, destination_url.to_string(), owner_id);

            if self.link_repository.insert_if_absent(link.clone()).await? {
                tracing::info!(
                    code = %link.code,
                    owner_id = %owner_id,
                    attempt,
                    "Short link created"
                );
                return Ok(link);
            }

            tracing::debug!(code = %link.code, attempt, "Short code collision");
        }

        tracing::warn!(attempts, owner_id = %owner_id, "Short code space exhausted");
        Err(LinkError::GenerationExhausted { attempts }.into())
    }

    /// Look up a link by code
    pub async fn get(&self, code: &str) -> DomainResult<ShortLink> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| DomainError::link_not_found(code))
    }

    /// Destination a code redirects to, if any; needs no identity
    pub async fn resolve(&self, code: &str) -> DomainResult<Option<String>> {
        Ok(self
            .link_repository
            .find_by_code(code)
            .await?
            .map(|link| link.destination_url))
    }

    /// Links created by `owner_id`
    pub async fn list_by_owner(&self, owner_id: Uuid) -> DomainResult<Vec<ShortLink>> {
        self.link_repository.list_by_owner(owner_id).await
    }

    /// Code-to-destination map of the links created by `owner_id`
    pub async fn destinations_for(&self, owner_id: Uuid) -> DomainResult<HashMap<String, String>> {
        Ok(self
            .list_by_owner(owner_id)
            .await?
            .into_iter()
            .map(|link| (link.code, link.destination_url))
            .collect())
    }

    /// Replace the destination of a link owned by `requester`
    ///
    /// Checks run in order: unknown code, foreign owner, unusable destination.
    /// A failed check leaves the link untouched.
    pub async fn update(
        &self,
        requester: Uuid,
        code: &str,
        destination_url: &str,
    ) -> DomainResult<ShortLink> {
        let link = self.get(code).await?;
        if !link.is_owned_by(requester) {
            return Err(self.deny(code));
        }

        check_destination(destination_url)?;

        let updated = self
            .link_repository
            .update_destination(code, requester, destination_url.to_string())
            .await
            .map_err(|err| self.disclose(err, code))?;

        tracing::info!(code = %code, owner_id = %requester, "Short link updated");
        Ok(updated)
    }

    /// Delete a link owned by `requester`
    pub async fn delete(&self, requester: Uuid, code: &str) -> DomainResult<ShortLink> {
        let removed = self
            .link_repository
            .delete_owned(code, requester)
            .await
            .map_err(|err| self.disclose(err, code))?;

        tracing::info!(code = %code, owner_id = %requester, "Short link deleted");
        Ok(removed)
    }

    /// Error returned when a requester touches someone else's link
    fn deny(&self, code: &str) -> DomainError {
        if self.config.hide_foreign_links {
            DomainError::link_not_found(code)
        } else {
            LinkError::Forbidden.into()
        }
    }

    fn disclose(&self, err: DomainError, code: &str) -> DomainError {
        match err {
            DomainError::Link(LinkError::Forbidden) => self.deny(code),
            other => other,
        }
    }
}

/// Destinations are stored as given; they only have to be non-blank and
/// free of control characters so they can be sent back in a header.
fn check_destination(destination_url: &str) -> DomainResult<()> {
    if destination_url.trim().is_empty() {
        return Err(DomainError::required("destination_url"));
    }
    if destination_url.chars().any(char::is_control) {
        return Err(ValidationError::ControlCharacters {
            field: "destination_url".to_string(),
        }
        .into());
    }
    Ok(())
}
