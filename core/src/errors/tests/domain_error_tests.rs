//! Unit tests for domain error types

use crate::errors::DomainError;

#[test]
fn test_error_messages() {
    let error = DomainError::InvalidPhoneNumber {
        phone: "123-4567-890".to_string(),
    };
    assert!(error.to_string().contains("Invalid phone number format"));
    assert!(error.to_string().contains("123-4567-890"));

    let error = DomainError::MissingInput {
        field: "code".to_string(),
    };
    assert_eq!(error.to_string(), "Missing required input: code");
}

#[test]
fn test_code_invalid_or_expired_is_non_distinguishing() {
    let message = DomainError::CodeInvalidOrExpired.to_string();
    assert!(message.contains("invalid or expired"));
}

#[test]
fn test_error_codes() {
    assert_eq!(
        DomainError::InvalidPhoneNumber { phone: String::new() }.error_code(),
        "INVALID_PHONE_NUMBER"
    );
    assert_eq!(
        DomainError::MissingInput { field: "phoneNumber".to_string() }.error_code(),
        "MISSING_INPUT"
    );
    assert_eq!(DomainError::CodeInvalidOrExpired.error_code(), "CODE_INVALID_OR_EXPIRED");
    assert_eq!(
        DomainError::Internal { message: "boom".to_string() }.error_code(),
        "INTERNAL_ERROR"
    );
}

#[test]
fn test_client_error_classification() {
    assert!(DomainError::CodeInvalidOrExpired.is_client_error());
    assert!(DomainError::MissingInput { field: "code".to_string() }.is_client_error());
    assert!(!DomainError::Internal { message: "store down".to_string() }.is_client_error());
}
