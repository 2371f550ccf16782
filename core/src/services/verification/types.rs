//! Types for verification service results

use chrono::{DateTime, Utc};

/// Result of issuing a verification code
///
/// Never carries the code itself; it only travels through the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCode {
    /// The phone number the code was issued for
    pub phone_number: String,
    /// When the issued code stops being accepted
    pub expires_at: DateTime<Utc>,
}

impl IssuedCode {
    /// Expiry as milliseconds since the Unix epoch
    pub fn expires_at_millis(&self) -> i64 {
        self.expires_at.timestamp_millis()
    }
}

/// Result of a successful code check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeCheck {
    /// Whether the phone number is now verified
    pub verified: bool,
}
