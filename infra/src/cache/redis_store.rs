//! Redis-backed code store
//!
//! Each pending entry is stored as JSON under `{prefix}{phone}` with a Redis
//! TTL matching the code lifetime, so abandoned entries disappear on their own.
//! The verification service still applies its own expiry check on every read.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use tracing::{debug, info, warn};

use pv_core::domain::entities::VerificationEntry;
use pv_core::services::verification::CodeStore;
use pv_shared::config::CacheConfig;
use pv_shared::phone::mask_phone_number;

use crate::InfrastructureError;

/// Keys fetched per SCAN round trip
const SCAN_BATCH_SIZE: usize = 100;

/// Deletes KEYS[1] only while it still holds ARGV[1]
const DELETE_IF_UNCHANGED: &str = r#"
if redis.call('GET', KEYS[1]) == ARGV[1] then
    return redis.call('DEL', KEYS[1])
end
return 0
"#;

/// Code store backed by a Redis server
#[derive(Clone)]
pub struct RedisCodeStore {
    client: redis::Client,
    key_prefix: String,
}

impl RedisCodeStore {
    /// Create a store on an existing client
    pub fn new(client: redis::Client, key_prefix: impl Into<String>) -> Result<Self, InfrastructureError> {
        let key_prefix = key_prefix.into();
        if key_prefix.is_empty() {
            return Err(InfrastructureError::Config(
                "Redis key prefix must not be empty".to_string(),
            ));
        }

        Ok(Self { client, key_prefix })
    }

    /// Open a client from configuration and check the server answers
    pub async fn connect(config: &CacheConfig) -> Result<Self, InfrastructureError> {
        let client = redis::Client::open(config.url.as_str())?;
        let store = Self::new(client, config.key_prefix.clone())?;
        store.ping().await?;

        info!(prefix = %store.key_prefix, "Connected Redis verification store");
        Ok(store)
    }

    /// Round-trip a PING to the server
    pub async fn ping(&self) -> Result<(), InfrastructureError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    /// Redis key holding the entry for a phone number
    pub fn entry_key(&self, phone_number: &str) -> String {
        format!("{}{}", self.key_prefix, phone_number)
    }

    /// TTL in whole seconds covering the entry's lifetime, never below one
    pub(crate) fn ttl_seconds(entry: &VerificationEntry) -> u64 {
        let lifetime = entry.expires_at - entry.created_at;
        let millis = lifetime.num_milliseconds().max(0) as u64;
        millis.div_ceil(1000).max(1)
    }

    async fn store(&self, entry: &VerificationEntry) -> Result<(), InfrastructureError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let key = self.entry_key(&entry.phone_number);
        let payload = serde_json::to_string(entry)?;

        let _: () = redis::cmd("SET")
            .arg(&key)
            .arg(payload)
            .arg("EX")
            .arg(Self::ttl_seconds(entry))
            .query_async(&mut conn)
            .await?;

        debug!(
            phone = %mask_phone_number(&entry.phone_number),
            ttl_seconds = Self::ttl_seconds(entry),
            "Stored verification entry in Redis"
        );
        Ok(())
    }

    async fn fetch(&self, phone_number: &str) -> Result<Option<VerificationEntry>, InfrastructureError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json: Option<String> = conn.get(self.entry_key(phone_number)).await?;

        match json {
            Some(j) => Ok(Some(serde_json::from_str(&j)?)),
            None => Ok(None),
        }
    }

    async fn take(&self, phone_number: &str) -> Result<Option<VerificationEntry>, InfrastructureError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json: Option<String> = redis::cmd("GETDEL")
            .arg(self.entry_key(phone_number))
            .query_async(&mut conn)
            .await?;

        match json {
            Some(j) => Ok(Some(serde_json::from_str(&j)?)),
            None => Ok(None),
        }
    }

    async fn scan_keys(&self) -> Result<Vec<String>, InfrastructureError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let pattern = format!("{}*", self.key_prefix);
        let mut cursor: u64 = 0;
        let mut keys = Vec::new();

        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH_SIZE)
                .query_async(&mut conn)
                .await?;

            keys.extend(batch);
            if next == 0 {
                break;
            }
            cursor = next;
        }

        Ok(keys)
    }

    /// Delete `key` if it still holds `observed`, returning whether it was removed
    ///
    /// A fresh entry written after `observed` was read is left untouched.
    pub(crate) async fn delete_if_unchanged(
        &self,
        conn: &mut redis::aio::MultiplexedConnection,
        key: &str,
        observed: &str,
    ) -> Result<bool, InfrastructureError> {
        let deleted: usize = redis::Script::new(DELETE_IF_UNCHANGED)
            .key(key)
            .arg(observed)
            .invoke_async(conn)
            .await?;
        Ok(deleted > 0)
    }

    async fn purge(&self, now: DateTime<Utc>) -> Result<usize, InfrastructureError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let mut removed = 0;

        for key in self.scan_keys().await? {
            let json: Option<String> = conn.get(&key).await?;
            let Some(json) = json else { continue };

            let expired = match serde_json::from_str::<VerificationEntry>(&json) {
                Ok(entry) => entry.is_expired_at(now),
                Err(e) => {
                    warn!(key = %key, error = %e, "Discarding unreadable verification entry");
                    true
                }
            };

            if expired && self.delete_if_unchanged(&mut conn, &key, &json).await? {
                removed += 1;
            } else if expired {
                debug!(key = %key, "Entry replaced during purge, keeping it");
            }
        }

        Ok(removed)
    }
}

#[async_trait]
impl CodeStore for RedisCodeStore {
    async fn put(&self, entry: VerificationEntry) -> Result<(), String> {
        self.store(&entry).await.map_err(|e| e.to_string())
    }

    async fn get(&self, phone_number: &str) -> Result<Option<VerificationEntry>, String> {
        self.fetch(phone_number).await.map_err(|e| e.to_string())
    }

    async fn remove(&self, phone_number: &str) -> Result<Option<VerificationEntry>, String> {
        self.take(phone_number).await.map_err(|e| e.to_string())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, String> {
        self.purge(now).await.map_err(|e| e.to_string())
    }

    async fn count(&self) -> Result<usize, String> {
        self.scan_keys()
            .await
            .map(|keys| keys.len())
            .map_err(|e| e.to_string())
    }
}
