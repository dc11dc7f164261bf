//! In-memory implementation of UserRepository

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::r#trait::UserRepository;

#[derive(Default)]
struct UserTables {
    users: HashMap<Uuid, User>,
    email_index: HashMap<String, Uuid>,
}

/// Process-lifetime user store with an email index
///
/// Both tables sit behind one lock so the index can never disagree with the
/// primary table.
#[derive(Default)]
pub struct InMemoryUserRepository {
    tables: RwLock<UserTables>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl InMemoryUserRepository {
    pub(crate) async fn len(&self) -> usize {
        self.tables.read().await.users.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .email_index
            .get(email)
            .and_then(|id| tables.users.get(id))
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;

        if tables.email_index.contains_key(&user.email) {
            return Err(DomainError::Auth(AuthError::DuplicateEmail));
        }

        tables.email_index.insert(user.email.clone(), user.id);
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;

        match tables.users.get_mut(&user.id) {
            Some(existing) => {
                existing.password_hash = user.password_hash;
                existing.last_login_at = user.last_login_at;
                Ok(existing.clone())
            }
            None => Err(DomainError::NotFound {
                resource: "User".to_string(),
            }),
        }
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.email_index.contains_key(email))
    }
}
