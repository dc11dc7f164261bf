//! Shared utilities and common types for the Shortlink server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and loading
//! - Error response structures and error codes
//! - Response payloads

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, Environment, LinksConfig, LoggingConfig, PasswordConfig,
    ServerConfig, SessionConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::HealthResponse;
