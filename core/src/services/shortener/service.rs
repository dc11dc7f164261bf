//! Shortener facade implementation

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::short_link::ShortLink;
use crate::domain::value_objects::{AuthResponse, Identity};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{LinkRepository, SessionRepository, UserRepository};
use crate::services::code::CodeGenerator;
use crate::services::credential::CredentialService;
use crate::services::link::LinkService;
use crate::services::session::{AuthGate, SessionService};

use super::config::ShortenerConfig;

/// Entry point for every shortener operation
///
/// Operations that act on behalf of a user take the caller's session token;
/// `None` or an invalid token is treated as an anonymous caller.
pub struct ShortenerService<U, L, S>
where
    U: UserRepository,
    L: LinkRepository,
    S: SessionRepository,
{
    credentials: Arc<CredentialService<U>>,
    sessions: Arc<SessionService<S>>,
    gate: AuthGate<U, S>,
    links: LinkService<L, U>,
}

impl<U, L, S> ShortenerService<U, L, S>
where
    U: UserRepository,
    L: LinkRepository,
    S: SessionRepository,
{
    /// Build the facade over the given repositories
    pub fn new(
        user_repository: Arc<U>,
        link_repository: Arc<L>,
        session_repository: Arc<S>,
        config: ShortenerConfig,
    ) -> DomainResult<Self> {
        let links = LinkService::new(link_repository, user_repository.clone(), config.links.clone());
        Self::assemble(user_repository, session_repository, links, config)
    }

    /// Build the facade with a custom short code source
    pub fn with_generator(
        user_repository: Arc<U>,
        link_repository: Arc<L>,
        session_repository: Arc<S>,
        generator: Arc<dyn CodeGenerator>,
        config: ShortenerConfig,
    ) -> DomainResult<Self> {
        let links = LinkService::with_generator(
            link_repository,
            user_repository.clone(),
            generator,
            config.links.clone(),
        );
        Self::assemble(user_repository, session_repository, links, config)
    }

    fn assemble(
        user_repository: Arc<U>,
        session_repository: Arc<S>,
        links: LinkService<L, U>,
        config: ShortenerConfig,
    ) -> DomainResult<Self> {
        let credentials = Arc::new(CredentialService::new(user_repository, config.credentials)?);
        let sessions = Arc::new(SessionService::new(session_repository, config.sessions));
        let gate = AuthGate::new(sessions.clone(), credentials.clone());

        Ok(Self {
            credentials,
            sessions,
            gate,
            links,
        })
    }

    /// Register a user without signing them in
    pub async fn register_user(&self, email: &str, password: &str) -> DomainResult<Uuid> {
        self.credentials.register(email, password).await
    }

    /// Register a user and start a session for them
    pub async fn sign_up(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let user_id = self.credentials.register(email, password).await?;
        self.start_session(user_id).await
    }

    /// Check credentials and start a session
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let user_id = self.credentials.verify(email, password).await?;
        let response = self.start_session(user_id).await?;

        tracing::info!(user_id = %user_id, "User logged in");
        Ok(response)
    }

    /// End the caller's session; a missing or stale token is fine
    pub async fn logout(&self, token: Option<&str>) -> DomainResult<()> {
        match token {
            Some(token) => self.sessions.revoke(token).await,
            None => Ok(()),
        }
    }

    /// Who the caller is
    pub async fn identify(&self, token: Option<&str>) -> DomainResult<Identity> {
        self.gate.identify(token).await
    }

    /// Shorten `destination_url` on behalf of the caller
    pub async fn create_link(
        &self,
        token: Option<&str>,
        destination_url: &str,
    ) -> DomainResult<ShortLink> {
        let user_id = self.gate.guard(token).await?;
        self.links.create(user_id, destination_url).await
    }

    /// Code-to-destination map of the caller's links
    pub async fn list_my_links(&self, token: Option<&str>) -> DomainResult<HashMap<String, String>> {
        let user_id = self.gate.guard(token).await?;
        self.links.destinations_for(user_id).await
    }

    /// Full records of the caller's links, oldest first
    pub async fn all_links_for(&self, token: Option<&str>) -> DomainResult<Vec<ShortLink>> {
        let user_id = self.gate.guard(token).await?;
        let mut links = self.links.list_by_owner(user_id).await?;
        links.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.code.cmp(&b.code)));
        Ok(links)
    }

    /// Look up a link; needs no identity
    pub async fn get_link(&self, code: &str) -> DomainResult<ShortLink> {
        self.links.get(code).await
    }

    /// Point one of the caller's links somewhere else
    pub async fn update_link(
        &self,
        token: Option<&str>,
        code: &str,
        destination_url: &str,
    ) -> DomainResult<ShortLink> {
        let user_id = self.gate.guard(token).await?;
        self.links.update(user_id, code, destination_url).await
    }

    /// Delete one of the caller's links
    pub async fn delete_link(&self, token: Option<&str>, code: &str) -> DomainResult<()> {
        let user_id = self.gate.guard(token).await?;
        self.links.delete(user_id, code).await.map(|_| ())
    }

    /// Destination for a public redirect
    pub async fn resolve_for_redirect(&self, code: &str) -> DomainResult<String> {
        self.links
            .resolve(code)
            .await?
            .ok_or_else(|| DomainError::link_not_found(code))
    }

    /// Drop expired sessions
    pub async fn purge_expired_sessions(&self) -> DomainResult<usize> {
        self.sessions.purge_expired().await
    }

    /// Session lifetime in seconds, if sessions expire
    pub fn session_max_age_seconds(&self) -> Option<i64> {
        self.sessions.max_age_seconds()
    }

    async fn start_session(&self, user_id: Uuid) -> DomainResult<AuthResponse> {
        let token = self.sessions.issue(user_id).await?;
        Ok(AuthResponse::new(user_id, token, self.sessions.max_age_seconds()))
    }
}
