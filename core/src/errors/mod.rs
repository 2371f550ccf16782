//! Domain-specific error types and error handling.

use pv_shared::error_codes;
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Errors surfaced by the verification lifecycle
///
/// `CodeInvalidOrExpired` deliberately covers "no such code", "code expired"
/// and "code mismatch" so callers cannot tell which case occurred.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid phone number format: {phone}")]
    InvalidPhoneNumber { phone: String },

    #[error("Missing required input: {field}")]
    MissingInput { field: String },

    #[error("Verification code is invalid or expired")]
    CodeInvalidOrExpired,

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Stable machine-readable code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::InvalidPhoneNumber { .. } => error_codes::INVALID_PHONE_NUMBER,
            DomainError::MissingInput { .. } => error_codes::MISSING_INPUT,
            DomainError::CodeInvalidOrExpired => error_codes::CODE_INVALID_OR_EXPIRED,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
        }
    }

    /// Whether the error was caused by the caller rather than the server
    pub fn is_client_error(&self) -> bool {
        !matches!(self, DomainError::Internal { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
