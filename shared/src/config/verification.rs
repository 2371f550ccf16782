//! Verification code lifecycle configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Default lifetime of an issued code (5 minutes)
pub const DEFAULT_CODE_TTL_SECONDS: i64 = 300;

/// Default upper bound on waiting for the delivery channel
pub const DEFAULT_DISPATCH_TIMEOUT_MS: u64 = 2000;

/// Verification code settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Seconds an issued code stays valid
    #[serde(default = "default_code_ttl")]
    pub code_ttl_seconds: i64,

    /// Milliseconds to wait for code delivery before giving up on it
    #[serde(default = "default_dispatch_timeout")]
    pub dispatch_timeout_ms: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: DEFAULT_CODE_TTL_SECONDS,
            dispatch_timeout_ms: DEFAULT_DISPATCH_TIMEOUT_MS,
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            code_ttl_seconds: env_or("VERIFICATION_CODE_TTL", DEFAULT_CODE_TTL_SECONDS),
            dispatch_timeout_ms: env_or("VERIFICATION_DISPATCH_TIMEOUT_MS", DEFAULT_DISPATCH_TIMEOUT_MS),
        }
    }
}

fn default_code_ttl() -> i64 {
    DEFAULT_CODE_TTL_SECONDS
}

fn default_dispatch_timeout() -> u64 {
    DEFAULT_DISPATCH_TIMEOUT_MS
}
