//! # Infrastructure Layer
//!
//! Concrete implementations of the seams the verification service is built on.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Cache**: in-memory and Redis code stores, plus the optional expiry sweep
//! - **SMS**: simulated SMS delivery that writes codes to the operational log

/// Cache module - Code store backends and expiry sweep
pub mod cache;

/// SMS service module - Simulated SMS delivery
pub mod sms;

pub use cache::{spawn_expiry_sweep, InMemoryCodeStore, RedisCodeStore};
pub use sms::{LogSmsService, SmsDispatcher, SmsService};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Entry could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}
