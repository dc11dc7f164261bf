//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

// Re-export all error types and utilities
pub use types::{AuthError, DomainErrorResponse as ErrorResponse, LinkError, ValidationError};

use sl_shared::errors::error_codes;
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Link(#[from] LinkError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Outcome categories every operation reports through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    Forbidden,
    Unauthorized,
    DuplicateEmail,
    AuthFailed,
    GenerationExhausted,
    Internal,
}

impl DomainError {
    /// Shorthand for a missing or empty required field
    pub fn required(field: impl Into<String>) -> Self {
        DomainError::Validation(ValidationError::required(field))
    }

    /// Shorthand for an unknown short code
    pub fn link_not_found(code: impl Into<String>) -> Self {
        DomainError::Link(LinkError::NotFound { code: code.into() })
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::Auth(AuthError::DuplicateEmail) => ErrorKind::DuplicateEmail,
            DomainError::Auth(AuthError::AuthenticationFailed) => ErrorKind::AuthFailed,
            DomainError::Auth(AuthError::Unauthorized) => ErrorKind::Unauthorized,
            DomainError::Link(LinkError::NotFound { .. }) => ErrorKind::NotFound,
            DomainError::Link(LinkError::Forbidden) => ErrorKind::Forbidden,
            DomainError::Link(LinkError::GenerationExhausted { .. }) => {
                ErrorKind::GenerationExhausted
            }
            DomainError::Validation(_) => ErrorKind::InvalidInput,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidInput => error_codes::INVALID_INPUT,
            ErrorKind::NotFound => error_codes::NOT_FOUND,
            ErrorKind::Forbidden => error_codes::FORBIDDEN,
            ErrorKind::Unauthorized => error_codes::UNAUTHORIZED,
            ErrorKind::DuplicateEmail => error_codes::DUPLICATE_EMAIL,
            ErrorKind::AuthFailed => error_codes::AUTH_FAILED,
            ErrorKind::GenerationExhausted => error_codes::GENERATION_EXHAUSTED,
            ErrorKind::Internal => error_codes::INTERNAL_ERROR,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Auth(auth) => auth.into(),
            DomainError::Link(link) => link.into(),
            DomainError::Validation(validation) => validation.into(),
            DomainError::NotFound { resource } => {
                ErrorResponse::new(err.code(), err.to_string()).add_detail("resource", resource)
            }
            // Internal details stay in the logs
            DomainError::Internal { .. } => {
                ErrorResponse::new(err.code(), "An internal error occurred")
            }
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
