//! Domain-specific error types for authentication, links and validation
//!
//! Each family converts into the shared `ErrorResponse` so the HTTP layer can
//! render any outcome without knowing the variant details.

use sl_shared::errors::error_codes;
use thiserror::Error;

// Re-export shared ErrorResponse for convenience
pub use sl_shared::errors::ErrorResponse as DomainErrorResponse;

/// Authentication-related errors
///
/// `AuthenticationFailed` covers both an unknown email and a wrong password so
/// callers cannot tell which part was wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Bad email or password")]
    AuthenticationFailed,

    #[error("Login required")]
    Unauthorized,
}

/// Short link errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("Short link not found: {code}")]
    NotFound { code: String },

    #[error("Short link belongs to another user")]
    Forbidden,

    #[error("Could not allocate a free short code after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Field contains control characters: {field}")]
    ControlCharacters { field: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::RequiredField {
            field: field.into(),
        }
    }
}

impl From<&AuthError> for DomainErrorResponse {
    fn from(err: &AuthError) -> Self {
        let error_code = match err {
            AuthError::DuplicateEmail => error_codes::DUPLICATE_EMAIL,
            AuthError::AuthenticationFailed => error_codes::AUTH_FAILED,
            AuthError::Unauthorized => error_codes::UNAUTHORIZED,
        };

        DomainErrorResponse::new(error_code, err.to_string())
    }
}

impl From<&LinkError> for DomainErrorResponse {
    fn from(err: &LinkError) -> Self {
        match err {
            LinkError::NotFound { code } => {
                DomainErrorResponse::new(error_codes::NOT_FOUND, err.to_string())
                    .add_detail("code", code)
            }
            LinkError::Forbidden => {
                DomainErrorResponse::new(error_codes::FORBIDDEN, err.to_string())
            }
            LinkError::GenerationExhausted { attempts } => {
                DomainErrorResponse::new(error_codes::GENERATION_EXHAUSTED, err.to_string())
                    .add_detail("attempts", attempts)
            }
        }
    }
}

impl From<&ValidationError> for DomainErrorResponse {
    fn from(err: &ValidationError) -> Self {
        match err {
            ValidationError::RequiredField { field }
            | ValidationError::ControlCharacters { field } => {
                DomainErrorResponse::new(error_codes::INVALID_INPUT, err.to_string())
                    .add_detail("field", field)
            }
        }
    }
}
