//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Password hashing and session cookie configuration
//! - `environment` - Environment detection and logging configuration
//! - `links` - Short code generation and ownership disclosure policy
//! - `server` - HTTP server configuration
//!
//! Values are layered: built-in defaults, then an optional
//! `config/<environment>.toml` file, then `SHORTLINK__*` environment variables
//! (sections separated by a double underscore, e.g. `SHORTLINK__SERVER__PORT`).

pub mod auth;
pub mod environment;
pub mod links;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{AuthConfig, PasswordConfig, SessionConfig};
pub use environment::{Environment, LoggingConfig};
pub use links::LinksConfig;
pub use server::ServerConfig;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "SHORTLINK";

/// Directory searched for per-environment configuration files
pub const CONFIG_DIR: &str = "config";

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Short link configuration
    pub links: LinksConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the optional environment file and `SHORTLINK__*` variables
    ///
    /// `.env` files are read first so their values participate in the
    /// environment layer.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        let file_name = format!("{}/{}", CONFIG_DIR, environment.config_file_stem());

        let settings = config::Config::builder()
            .add_source(config::File::with_name(&file_name).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: AppConfig = settings.try_deserialize()?;
        app_config.environment = environment;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Check the invariants the services rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth.validate()?;
        self.links.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.links.code_length, 6);
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let json = serde_json::json!({
            "server": { "port": 9000 },
            "links": { "hide_foreign_links": true }
        });
        let config: AppConfig = serde_json::from_value(json).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.links.hide_foreign_links);
        assert_eq!(config.links.max_generation_attempts, 16);
        assert_eq!(config.auth.session.cookie_name, "sl_session");
    }

    #[test]
    fn test_invalid_section_fails_validation() {
        let mut config = AppConfig::default();
        config.links.code_length = 0;

        let error = config.validate().unwrap_err();
        assert!(matches!(error, ConfigError::Invalid { key: "links.code_length", .. }));
    }
}
