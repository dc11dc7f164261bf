//! Credential service module
//!
//! Registers users with bcrypt-hashed passwords and verifies login attempts.

mod config;
mod service;


pub use config::CredentialServiceConfig;
pub use service::CredentialService;
