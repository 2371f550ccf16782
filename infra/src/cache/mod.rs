//! Cache module for verification code storage
//!
//! Provides the code store backends selected by `CacheConfig::backend` and the
//! optional task that periodically purges expired entries.

pub mod memory_store;
pub mod redis_store;
pub mod sweep;

#[cfg(test)]
mod tests;

pub use memory_store::InMemoryCodeStore;
pub use redis_store::RedisCodeStore;
pub use sweep::spawn_expiry_sweep;

// Re-export commonly used types
pub use pv_shared::config::CacheConfig;
