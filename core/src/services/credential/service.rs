//! Credential service implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;

use super::config::CredentialServiceConfig;

/// Password checked against the dummy hash when an email is unknown
const DUMMY_PASSWORD: &str = "shortlink-dummy-password";

/// Service owning user registration and password verification
pub struct CredentialService<U>
where
    U: UserRepository,
{
    /// User storage
    user_repository: Arc<U>,
    /// Hash verified for unknown emails so both failure paths cost the same
    dummy_hash: String,
    config: CredentialServiceConfig,
}

impl<U> CredentialService<U>
where
    U: UserRepository,
{
    /// Create a credential service
    ///
    /// Fails when the configured bcrypt cost is rejected by bcrypt.
    pub fn new(user_repository: Arc<U>, config: CredentialServiceConfig) -> DomainResult<Self> {
        let dummy_hash = bcrypt::hash(DUMMY_PASSWORD, config.bcrypt_cost).map_err(hash_error)?;

        Ok(Self {
            user_repository,
            dummy_hash,
            config,
        })
    }

    /// Register a new user
    ///
    /// # Errors
    ///
    /// * `ValidationError::RequiredField` - blank email or empty password
    /// * `AuthError::DuplicateEmail` - email already registered
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<Uuid> {
        if email.trim().is_empty() {
            return Err(DomainError::required("email"));
        }
        if password.is_empty() {
            return Err(DomainError::required("password"));
        }

        // Skip the expensive hash for an obvious duplicate; `create` still
        // enforces uniqueness atomically.
        if self.user_repository.exists_by_email(email).await? {
            tracing::info!(email = %email, "Registration rejected: email taken");
            return Err(AuthError::DuplicateEmail.into());
        }

        let password_hash = self.hash_password(password).await?;
        let user = self
            .user_repository
            .create(User::new(email.to_string(), password_hash))
            .await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user.id)
    }

    /// Check an email and password pair
    ///
    /// Unknown emails, wrong passwords and empty fields all yield
    /// `AuthError::AuthenticationFailed`.
    pub async fn verify(&self, email: &str, password: &str) -> DomainResult<Uuid> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::AuthenticationFailed.into());
        }

        let Some(mut user) = self.user_repository.find_by_email(email).await? else {
            self.check_password(password, &self.dummy_hash).await?;
            tracing::debug!("Login failed: unknown email");
            return Err(AuthError::AuthenticationFailed.into());
        };

        if !self.check_password(password, &user.password_hash).await? {
            tracing::debug!(user_id = %user.id, "Login failed: wrong password");
            return Err(AuthError::AuthenticationFailed.into());
        }

        user.update_last_login();
        let user_id = user.id;
        if let Err(err) = self.user_repository.update(user).await {
            tracing::warn!(user_id = %user_id, error = %err, "Failed to record login time");
        }

        Ok(user_id)
    }

    /// Look up a registered user
    pub async fn find_user(&self, user_id: Uuid) -> DomainResult<Option<User>> {
        self.user_repository.find_by_id(user_id).await
    }

    async fn hash_password(&self, password: &str) -> DomainResult<String> {
        let password = password.to_string();
        let cost = self.config.bcrypt_cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(join_error)?
            .map_err(hash_error)
    }

    async fn check_password(&self, password: &str, hash: &str) -> DomainResult<bool> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(join_error)?
            .map_err(hash_error)
    }
}

fn hash_error(err: bcrypt::BcryptError) -> DomainError {
    DomainError::Internal {
        message: format!("Password hashing failed: {err}"),
    }
}

fn join_error(err: tokio::task::JoinError) -> DomainError {
    DomainError::Internal {
        message: format!("Password hashing task failed: {err}"),
    }
}
