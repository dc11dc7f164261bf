//! Gate for operations that need a signed-in user

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::value_objects::Identity;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{SessionRepository, UserRepository};
use crate::services::credential::CredentialService;

use super::service::SessionService;

/// Turns a session token into a live user id or `Unauthorized`
pub struct AuthGate<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    sessions: Arc<SessionService<S>>,
    credentials: Arc<CredentialService<U>>,
}

impl<U, S> AuthGate<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(sessions: Arc<SessionService<S>>, credentials: Arc<CredentialService<U>>) -> Self {
        Self {
            sessions,
            credentials,
        }
    }

    /// Identity behind `token`, confirming the user still exists
    ///
    /// A session whose user has vanished is revoked and reads as anonymous.
    pub async fn identify(&self, token: Option<&str>) -> DomainResult<Identity> {
        let Identity::User(user_id) = self.sessions.resolve(token).await? else {
            return Ok(Identity::Anonymous);
        };

        if self.credentials.find_user(user_id).await?.is_none() {
            if let Some(token) = token {
                self.sessions.revoke(token).await?;
            }
            tracing::warn!(user_id = %user_id, "Session for unknown user revoked");
            return Ok(Identity::Anonymous);
        }

        Ok(Identity::User(user_id))
    }

    /// User id behind `token`, or `AuthError::Unauthorized`
    pub async fn guard(&self, token: Option<&str>) -> DomainResult<Uuid> {
        self.identify(token)
            .await?
            .user_id()
            .ok_or_else(|| AuthError::Unauthorized.into())
    }
}
