//! Traits for code storage and delivery integration

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::VerificationEntry;

/// Keyed store holding at most one pending entry per phone number
///
/// Implementations only store; expiry and consumption rules live in the
/// verification service. Backends may additionally evict entries on their own
/// TTL, which the service treats the same as a missing entry.
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Store an entry, replacing any entry already held for its phone number
    async fn put(&self, entry: VerificationEntry) -> Result<(), String>;
    /// Look up the entry for a phone number
    async fn get(&self, phone_number: &str) -> Result<Option<VerificationEntry>, String>;
    /// Delete the entry for a phone number, returning it if one existed
    async fn remove(&self, phone_number: &str) -> Result<Option<VerificationEntry>, String>;
    /// Delete every entry that is expired at `now`, returning how many were removed
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, String>;
    /// Number of entries currently held
    async fn count(&self) -> Result<usize, String>;
}

/// Trait for out-of-band code delivery (SMS gateway or its simulation)
#[async_trait]
pub trait CodeDispatcher: Send + Sync {
    /// Deliver a verification code, returning a provider message id
    async fn dispatch_code(&self, phone_number: &str, code: &str) -> Result<String, String>;
}
