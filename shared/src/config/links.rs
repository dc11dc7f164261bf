//! Short link configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Number of characters in a generated short code
    pub code_length: usize,

    /// Draws attempted before giving up on a collision-free code
    pub max_generation_attempts: u32,

    /// Report links owned by someone else as missing instead of forbidden
    pub hide_foreign_links: bool,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            code_length: 6,
            max_generation_attempts: 16,
            hide_foreign_links: false,
        }
    }
}

impl LinksConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.code_length == 0 {
            return Err(ConfigError::Invalid {
                key: "links.code_length",
                reason: String::from("must be at least 1"),
            });
        }
        if self.max_generation_attempts == 0 {
            return Err(ConfigError::Invalid {
                key: "links.max_generation_attempts",
                reason: String::from("must be at least 1"),
            });
        }
        Ok(())
    }
}
