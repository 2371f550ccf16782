//! Main verification service implementation

use chrono::Duration;
use pv_shared::phone::{is_valid_regional_phone, mask_phone_number};
use std::sync::Arc;

use crate::domain::entities::VerificationEntry;
use crate::errors::{DomainError, DomainResult};

use super::clock::{SystemTimeSource, TimeSource};
use super::config::VerificationServiceConfig;
use super::key_locks::KeyLocks;
use super::traits::{CodeDispatcher, CodeStore};
use super::types::{CodeCheck, IssuedCode};

/// Verification service for issuing and checking SMS verification codes
///
/// Holds the one-entry-per-number rules: a new request replaces any pending
/// code, a successful check consumes it, a mismatch leaves it in place, and an
/// expired entry is deleted the moment a check observes it.
pub struct VerificationService<S: CodeStore + ?Sized, D: CodeDispatcher + ?Sized> {
    /// Store holding pending entries
    store: Arc<S>,
    /// Delivery channel for issued codes
    dispatcher: Arc<D>,
    /// Clock used for issue and expiry decisions
    clock: Arc<dyn TimeSource>,
    /// Service configuration
    config: VerificationServiceConfig,
    /// Serializes operations on the same phone number
    locks: KeyLocks,
}

impl<S, D> VerificationService<S, D>
where
    S: CodeStore + ?Sized,
    D: CodeDispatcher + ?Sized + 'static,
{
    /// Create a new verification service on the system clock
    ///
    /// # Arguments
    ///
    /// * `store` - Code store implementation
    /// * `dispatcher` - Code delivery implementation
    /// * `config` - Service configuration
    pub fn new(store: Arc<S>, dispatcher: Arc<D>, config: VerificationServiceConfig) -> Self {
        Self::with_time_source(store, dispatcher, Arc::new(SystemTimeSource), config)
    }

    /// Create a new verification service on a custom clock
    pub fn with_time_source(
        store: Arc<S>,
        dispatcher: Arc<D>,
        clock: Arc<dyn TimeSource>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            store,
            dispatcher,
            clock,
            config,
            locks: KeyLocks::new(),
        }
    }

    /// Issue a fresh code for a phone number and hand it to the dispatcher
    ///
    /// Any code previously pending for the number stops being accepted. The
    /// returned value carries the expiry but never the code. Delivery runs in
    /// the background: the result does not wait for it, and failures and
    /// timeouts are only logged.
    ///
    /// # Errors
    ///
    /// * `DomainError::InvalidPhoneNumber` - The number is empty or not `01X-XXX(X)-XXXX`
    /// * `DomainError::Internal` - The store rejected the write
    pub async fn request_code(&self, phone_number: &str) -> DomainResult<IssuedCode> {
        if !is_valid_regional_phone(phone_number) {
            tracing::debug!(
                phone = %mask_phone_number(phone_number),
                event = "phone_rejected",
                "Rejected verification request for malformed phone number"
            );
            return Err(DomainError::InvalidPhoneNumber {
                phone: phone_number.to_string(),
            });
        }

        let masked = mask_phone_number(phone_number);

        let entry = {
            let _guard = self.locks.acquire(phone_number).await;

            let entry = VerificationEntry::issue(
                phone_number.to_string(),
                self.clock.now(),
                Duration::seconds(self.config.code_ttl_seconds),
            );

            self.store.put(entry.clone()).await.map_err(|e| {
                tracing::error!(
                    phone = %masked,
                    error = %e,
                    event = "code_storage_failed",
                    "Failed to store verification code"
                );
                DomainError::Internal {
                    message: format!("Failed to store verification code: {}", e),
                }
            })?;

            entry
        };

        tracing::info!(
            phone = %masked,
            expires_at = %entry.expires_at,
            event = "code_issued",
            "Issued new verification code"
        );

        self.spawn_dispatch(&entry);

        Ok(IssuedCode {
            phone_number: entry.phone_number,
            expires_at: entry.expires_at,
        })
    }

    /// Check a submitted code against the pending entry for a phone number
    ///
    /// On success the entry is consumed. On a mismatch the entry is kept so the
    /// caller can retry until it expires. An expired entry is deleted.
    ///
    /// # Errors
    ///
    /// * `DomainError::MissingInput` - Phone number or code is empty
    /// * `DomainError::CodeInvalidOrExpired` - No entry, expired entry, or wrong code
    /// * `DomainError::Internal` - The store failed
    pub async fn check_code(&self, phone_number: &str, code: &str) -> DomainResult<CodeCheck> {
        if phone_number.is_empty() {
            return Err(DomainError::MissingInput {
                field: "phoneNumber".to_string(),
            });
        }
        if code.is_empty() {
            return Err(DomainError::MissingInput {
                field: "code".to_string(),
            });
        }

        let masked = mask_phone_number(phone_number);
        let _guard = self.locks.acquire(phone_number).await;
        let now = self.clock.now();

        let entry = match self.store.get(phone_number).await.map_err(store_failure)? {
            Some(entry) => entry,
            None => {
                tracing::info!(
                    phone = %masked,
                    event = "code_not_found",
                    "No pending verification code"
                );
                return Err(DomainError::CodeInvalidOrExpired);
            }
        };

        if entry.is_expired_at(now) {
            self.store.remove(phone_number).await.map_err(store_failure)?;
            tracing::info!(
                phone = %masked,
                expired_at = %entry.expires_at,
                event = "code_expired",
                "Verification code expired and was removed"
            );
            return Err(DomainError::CodeInvalidOrExpired);
        }

        if !entry.matches(code) {
            tracing::info!(
                phone = %masked,
                event = "code_mismatch",
                "Verification code did not match"
            );
            return Err(DomainError::CodeInvalidOrExpired);
        }

        self.store.remove(phone_number).await.map_err(store_failure)?;

        tracing::info!(
            phone = %masked,
            event = "code_verified",
            "Phone number verified"
        );

        Ok(CodeCheck { verified: true })
    }

    /// Delete every entry that has expired, returning how many were removed
    pub async fn purge_expired(&self) -> DomainResult<usize> {
        let removed = self
            .store
            .purge_expired(self.clock.now())
            .await
            .map_err(store_failure)?;

        if removed > 0 {
            tracing::debug!(removed = removed, event = "codes_purged", "Purged expired verification codes");
        }

        Ok(removed)
    }

    /// Number of entries currently pending in the store
    pub async fn pending_count(&self) -> DomainResult<usize> {
        self.store.count().await.map_err(store_failure)
    }

    /// Service configuration
    pub fn config(&self) -> &VerificationServiceConfig {
        &self.config
    }

    /// Number of phone numbers with an operation in flight
    pub fn active_locks(&self) -> usize {
        self.locks.len()
    }

    /// Hand the code to the dispatcher on a background task
    ///
    /// The caller's result never waits on delivery. The task gives up after
    /// `dispatch_timeout_ms` and only logs the outcome.
    fn spawn_dispatch(&self, entry: &VerificationEntry) {
        let dispatcher = Arc::clone(&self.dispatcher);
        let phone_number = entry.phone_number.clone();
        let code = entry.code.clone();
        let timeout_ms = self.config.dispatch_timeout_ms;

        tokio::spawn(async move {
            let masked = mask_phone_number(&phone_number);

            match tokio::time::timeout(
                std::time::Duration::from_millis(timeout_ms),
                dispatcher.dispatch_code(&phone_number, &code),
            )
            .await
            {
                Ok(Ok(message_id)) => {
                    tracing::debug!(
                        phone = %masked,
                        message_id = %message_id,
                        event = "code_dispatched",
                        "Verification code handed to dispatcher"
                    );
                }
                Ok(Err(e)) => {
                    tracing::warn!(
                        phone = %masked,
                        error = %e,
                        event = "code_dispatch_failed",
                        "Failed to deliver verification code"
                    );
                }
                Err(_) => {
                    tracing::warn!(
                        phone = %masked,
                        timeout_ms = timeout_ms,
                        event = "code_dispatch_timeout",
                        "Verification code delivery timed out"
                    );
                }
            }
        });
    }
}

fn store_failure(e: String) -> DomainError {
    tracing::error!(error = %e, event = "code_store_failed", "Verification store operation failed");
    DomainError::Internal {
        message: format!("Verification store error: {}", e),
    }
}
