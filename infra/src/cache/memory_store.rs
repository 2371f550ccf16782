//! In-process code store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use pv_core::domain::entities::VerificationEntry;
use pv_core::services::verification::CodeStore;
use pv_shared::phone::mask_phone_number;

/// Code store holding entries in a process-local map
///
/// Entries live until they are consumed, replaced, or purged. Nothing is
/// persisted across restarts.
#[derive(Debug, Default)]
pub struct InMemoryCodeStore {
    entries: RwLock<HashMap<String, VerificationEntry>>,
}

impl InMemoryCodeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CodeStore for InMemoryCodeStore {
    async fn put(&self, entry: VerificationEntry) -> Result<(), String> {
        debug!(
            phone = %mask_phone_number(&entry.phone_number),
            "Storing verification entry in memory"
        );
        self.entries
            .write()
            .await
            .insert(entry.phone_number.clone(), entry);
        Ok(())
    }

    async fn get(&self, phone_number: &str) -> Result<Option<VerificationEntry>, String> {
        Ok(self.entries.read().await.get(phone_number).cloned())
    }

    async fn remove(&self, phone_number: &str) -> Result<Option<VerificationEntry>, String> {
        Ok(self.entries.write().await.remove(phone_number))
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, String> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        Ok(before - entries.len())
    }

    async fn count(&self) -> Result<usize, String> {
        Ok(self.entries.read().await.len())
    }
}
