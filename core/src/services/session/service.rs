//! Session service implementation

use std::sync::Arc;

use rand::Rng;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::entities::session::Session;
use crate::domain::value_objects::Identity;
use crate::errors::DomainResult;
use crate::repositories::SessionRepository;

use super::config::SessionServiceConfig;

/// Random bytes per session token (hex-encoded to twice as many characters)
pub const TOKEN_BYTES: usize = 32;

/// Digest under which a token's session is stored
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// Service issuing and resolving session tokens
pub struct SessionService<S>
where
    S: SessionRepository,
{
    session_repository: Arc<S>,
    config: SessionServiceConfig,
}

impl<S> SessionService<S>
where
    S: SessionRepository,
{
    pub fn new(session_repository: Arc<S>, config: SessionServiceConfig) -> Self {
        Self {
            session_repository,
            config,
        }
    }

    /// Start a session for `user_id` and return its token
    ///
    /// The token is returned once; only its digest is kept.
    pub async fn issue(&self, user_id: Uuid) -> DomainResult<String> {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::thread_rng().fill(&mut bytes);
        let token = hex::encode(bytes);

        self.session_repository
            .save(Session::new(hash_token(&token), user_id, self.config.max_age))
            .await?;

        tracing::debug!(user_id = %user_id, "Session issued");
        Ok(token)
    }

    /// End the session behind `token`
    ///
    /// Unknown, empty and already revoked tokens are not an error.
    pub async fn revoke(&self, token: &str) -> DomainResult<()> {
        if token.is_empty() {
            return Ok(());
        }

        if self.session_repository.remove(&hash_token(token)).await? {
            tracing::debug!("Session revoked");
        }
        Ok(())
    }

    /// Identity behind an optional token
    ///
    /// Expired sessions are dropped on sight.
    pub async fn resolve(&self, token: Option<&str>) -> DomainResult<Identity> {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Ok(Identity::Anonymous);
        };

        let token_hash = hash_token(token);
        let Some(session) = self.session_repository.find(&token_hash).await? else {
            return Ok(Identity::Anonymous);
        };

        if session.is_expired() {
            self.session_repository.remove(&token_hash).await?;
            tracing::debug!(user_id = %session.user_id, "Expired session dropped");
            return Ok(Identity::Anonymous);
        }

        Ok(Identity::User(session.user_id))
    }

    /// Drop every expired session
    pub async fn purge_expired(&self) -> DomainResult<usize> {
        let purged = self.session_repository.purge_expired().await?;
        if purged > 0 {
            tracing::info!(purged, "Expired sessions purged");
        }
        Ok(purged)
    }

    /// Session lifetime in seconds, if sessions expire
    pub fn max_age_seconds(&self) -> Option<i64> {
        self.config.max_age_seconds()
    }
}
