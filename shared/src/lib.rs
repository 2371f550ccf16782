//! Shared utilities and common types for the phone verification server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error codes and the response envelope
//! - Phone number utilities

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, CorsConfig, Environment, LoggingConfig, ServerConfig,
    StoreBackend, VerificationConfig,
};
pub use errors::error_codes;
pub use types::{ApiResponse, HealthResponse, HealthStatus};
pub use utils::phone;
