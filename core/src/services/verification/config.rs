//! Configuration for the verification service

use pv_shared::config::VerificationConfig;

use crate::domain::entities::verification_code::DEFAULT_EXPIRATION_MINUTES;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of seconds before a verification code expires
    pub code_ttl_seconds: i64,
    /// Milliseconds to wait on the dispatcher before abandoning delivery
    pub dispatch_timeout_ms: u64,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: DEFAULT_EXPIRATION_MINUTES * 60,
            dispatch_timeout_ms: 2000,
        }
    }
}

impl From<&VerificationConfig> for VerificationServiceConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            code_ttl_seconds: config.code_ttl_seconds,
            dispatch_timeout_ms: config.dispatch_timeout_ms,
        }
    }
}
