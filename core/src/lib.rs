//! # Shortlink Core
//!
//! Core business logic and domain layer for the Shortlink backend.
//! This crate contains domain entities, business services, repository interfaces
//! with their in-memory implementations, and the error taxonomy shared by all
//! operations.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{AuthResponse, Identity, Session, ShortLink, User};
pub use errors::{
    AuthError, DomainError, DomainResult, ErrorKind, ErrorResponse, LinkError, ValidationError,
};
pub use repositories::{
    InMemoryLinkRepository, InMemorySessionRepository, InMemoryUserRepository, LinkRepository,
    SessionRepository, UserRepository,
};
pub use services::{
    AuthGate, CodeGenerator, CredentialService, CredentialServiceConfig, LinkService,
    LinkServiceConfig, RandomCodeGenerator, SessionService, SessionServiceConfig, ShortenerConfig,
    ShortenerService,
};
