//! Configuration for the link service

use sl_shared::config::LinksConfig;

use crate::services::code::DEFAULT_CODE_LENGTH;

/// Configuration for the link service
#[derive(Debug, Clone)]
pub struct LinkServiceConfig {
    /// Characters per generated code
    pub code_length: usize,
    /// Code draws before `GenerationExhausted` is reported
    pub max_generation_attempts: u32,
    /// Report foreign links as missing rather than forbidden
    pub hide_foreign_links: bool,
}

impl Default for LinkServiceConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            max_generation_attempts: 16,
            hide_foreign_links: false,
        }
    }
}

impl From<&LinksConfig> for LinkServiceConfig {
    fn from(config: &LinksConfig) -> Self {
        Self {
            code_length: config.code_length,
            max_generation_attempts: config.max_generation_attempts,
            hide_foreign_links: config.hide_foreign_links,
        }
    }
}
