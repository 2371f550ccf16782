//! Periodic purge of expired verification entries

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use pv_core::services::verification::{CodeDispatcher, CodeStore, VerificationService};

/// Spawn a background task that purges expired entries every `interval`
///
/// Lookups already treat expired entries as absent, so the sweep only bounds
/// memory held by numbers that never come back. The task runs until aborted.
pub fn spawn_expiry_sweep<S, D>(
    service: Arc<VerificationService<S, D>>,
    interval: Duration,
) -> JoinHandle<()>
where
    S: CodeStore + ?Sized + 'static,
    D: CodeDispatcher + ?Sized + 'static,
{
    info!(interval_seconds = interval.as_secs(), "Starting verification expiry sweep");

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // First tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;

            match service.purge_expired().await {
                Ok(removed) if removed > 0 => {
                    info!(removed = removed, event = "expiry_sweep", "Purged expired verification codes");
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, event = "expiry_sweep_failed", "Expiry sweep failed");
                }
            }
        }
    })
}
