//! Configuration for the shortener facade

use sl_shared::config::AppConfig;

use crate::services::credential::CredentialServiceConfig;
use crate::services::link::LinkServiceConfig;
use crate::services::session::SessionServiceConfig;

/// Per-service configuration bundle
#[derive(Debug, Clone, Default)]
pub struct ShortenerConfig {
    pub credentials: CredentialServiceConfig,
    pub sessions: SessionServiceConfig,
    pub links: LinkServiceConfig,
}

impl From<&AppConfig> for ShortenerConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            credentials: CredentialServiceConfig::from(&config.auth.password),
            sessions: SessionServiceConfig::from(&config.auth.session),
            links: LinkServiceConfig::from(&config.links),
        }
    }
}
