//! Unit tests for domain error types

use crate::errors::{AuthError, DomainError, ErrorKind, ErrorResponse, LinkError, ValidationError};

#[test]
fn test_kind_mapping_covers_taxonomy() {
    let cases = vec![
        (DomainError::required("email"), ErrorKind::InvalidInput, "INVALID_INPUT"),
        (DomainError::link_not_found("abc123"), ErrorKind::NotFound, "NOT_FOUND"),
        (DomainError::Link(LinkError::Forbidden), ErrorKind::Forbidden, "FORBIDDEN"),
        (DomainError::Auth(AuthError::Unauthorized), ErrorKind::Unauthorized, "UNAUTHORIZED"),
        (DomainError::Auth(AuthError::DuplicateEmail), ErrorKind::DuplicateEmail, "DUPLICATE_EMAIL"),
        (DomainError::Auth(AuthError::AuthenticationFailed), ErrorKind::AuthFailed, "AUTH_FAILED"),
        (
            DomainError::Link(LinkError::GenerationExhausted { attempts: 16 }),
            ErrorKind::GenerationExhausted,
            "GENERATION_EXHAUSTED",
        ),
        (
            DomainError::Internal { message: "lock poisoned".to_string() },
            ErrorKind::Internal,
            "INTERNAL_ERROR",
        ),
    ];

    for (error, kind, code) in cases {
        assert_eq!(error.kind(), kind, "kind for {:?}", error);
        assert_eq!(error.code(), code, "code for {:?}", error);
    }
}

#[test]
fn test_user_not_found_is_not_found_kind() {
    let error = DomainError::NotFound {
        resource: "User".to_string(),
    };
    assert_eq!(error.kind(), ErrorKind::NotFound);
}

#[test]
fn test_validation_error_with_field() {
    let error = ValidationError::required("destination_url");
    assert!(error.to_string().contains("destination_url"));

    let response: ErrorResponse = (&DomainError::from(error)).into();
    assert_eq!(response.error, "INVALID_INPUT");
    assert_eq!(response.details.unwrap()["field"], "destination_url");
}

#[test]
fn test_control_characters_are_invalid_input() {
    let error = DomainError::from(ValidationError::ControlCharacters {
        field: "destination_url".to_string(),
    });
    assert_eq!(error.kind(), ErrorKind::InvalidInput);

    let response: ErrorResponse = (&error).into();
    assert_eq!(response.error, "INVALID_INPUT");
    assert_eq!(response.details.unwrap()["field"], "destination_url");
}

#[test]
fn test_link_not_found_response_carries_code() {
    let response: ErrorResponse = (&DomainError::link_not_found("9sm5xK")).into();
    assert_eq!(response.error, "NOT_FOUND");
    assert_eq!(response.details.unwrap()["code"], "9sm5xK");
}

#[test]
fn test_auth_failed_message_does_not_name_the_wrong_part() {
    let message = AuthError::AuthenticationFailed.to_string();
    assert_eq!(message, "Bad email or password");
}

#[test]
fn test_internal_error_response_hides_details() {
    let error = DomainError::Internal {
        message: "hash worker panicked".to_string(),
    };
    let response: ErrorResponse = (&error).into();

    assert_eq!(response.error, "INTERNAL_ERROR");
    assert!(!response.message.contains("panicked"));
}
