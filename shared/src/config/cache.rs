//! Code store configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// Which backend holds pending verification entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local map; entries are lost on restart
    #[default]
    Memory,
    /// Redis, shared between server instances
    Redis,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            "redis" => Ok(StoreBackend::Redis),
            _ => Err(format!("Invalid store backend: {}", s)),
        }
    }
}

/// Code store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Store backend
    #[serde(default)]
    pub backend: StoreBackend,

    /// Redis connection URL (only used by the Redis backend)
    pub url: String,

    /// Key prefix for Redis entries
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Interval of the optional expiry sweep in seconds (0 = disabled)
    #[serde(default)]
    pub sweep_interval_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            url: String::from("redis://localhost:6379"),
            key_prefix: default_key_prefix(),
            sweep_interval_seconds: 0,
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend: env_or("STORE_BACKEND", defaults.backend),
            url: std::env::var("REDIS_URL").unwrap_or(defaults.url),
            key_prefix: std::env::var("REDIS_KEY_PREFIX").unwrap_or(defaults.key_prefix),
            sweep_interval_seconds: env_or("STORE_SWEEP_INTERVAL", defaults.sweep_interval_seconds),
        }
    }

    /// Create a Redis-backed configuration with URL
    pub fn redis(url: impl Into<String>) -> Self {
        Self {
            backend: StoreBackend::Redis,
            url: url.into(),
            ..Default::default()
        }
    }

    /// Check if the periodic sweep should run
    pub fn sweep_enabled(&self) -> bool {
        self.sweep_interval_seconds > 0
    }
}

fn default_key_prefix() -> String {
    String::from("verification:entry:")
}
