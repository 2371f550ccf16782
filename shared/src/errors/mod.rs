//! Shared error codes

/// Stable error codes carried in the `error` field of failed responses
pub mod error_codes {
    pub const INVALID_PHONE_NUMBER: &str = "INVALID_PHONE_NUMBER";
    pub const MISSING_INPUT: &str = "MISSING_INPUT";
    pub const CODE_INVALID_OR_EXPIRED: &str = "CODE_INVALID_OR_EXPIRED";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
}
