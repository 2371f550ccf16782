//! Configuration module with business-specific sub-modules
//!
//! - `cache` - code store backend and Redis settings
//! - `environment` - environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration
//! - `verification` - code lifetime and delivery settings

pub mod cache;
pub mod environment;
pub mod server;
pub mod verification;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use cache::{CacheConfig, StoreBackend};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};
pub use verification::VerificationConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Code store configuration
    pub cache: CacheConfig,

    /// Verification code settings
    #[serde(default)]
    pub verification: VerificationConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::default(),
            cache: CacheConfig::default(),
            verification: VerificationConfig::default(),
            cors: CorsConfig::development(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 8080),
            cache: CacheConfig::default(),
            verification: VerificationConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Load configuration from environment
    ///
    /// Starts from the preset of the detected environment, then applies the
    /// individual variables that are set.
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        let base = match env {
            Environment::Production => Self::production(),
            Environment::Development | Environment::Staging => Self::development(),
        };

        Self {
            environment: env,
            server: ServerConfig::from_env(),
            cache: CacheConfig::from_env(),
            verification: VerificationConfig::from_env(),
            cors: base.cors.with_env_overrides(),
            logging: LoggingConfig::for_environment(env).with_env_overrides(),
        }
    }
}

/// Read and parse an environment variable, falling back to `default` when it
/// is unset or unparseable
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
