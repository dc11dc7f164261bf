//! Configuration for the credential service

use sl_shared::config::PasswordConfig;

/// Configuration for the credential service
#[derive(Debug, Clone)]
pub struct CredentialServiceConfig {
    /// bcrypt work factor used for new hashes
    pub bcrypt_cost: u32,
}

impl Default for CredentialServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl From<&PasswordConfig> for CredentialServiceConfig {
    fn from(config: &PasswordConfig) -> Self {
        Self {
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}
