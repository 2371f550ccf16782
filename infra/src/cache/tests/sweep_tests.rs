//! Unit tests for the expiry sweep task

use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;

use pv_core::services::verification::{
    ManualTimeSource, VerificationService, VerificationServiceConfig,
};

use crate::cache::{spawn_expiry_sweep, InMemoryCodeStore};
use crate::sms::{LogSmsService, SmsDispatcher};

#[tokio::test(start_paused = true)]
async fn test_sweep_purges_expired_entries() {
    let clock = Arc::new(ManualTimeSource::new(
        Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap(),
    ));
    let service = Arc::new(VerificationService::with_time_source(
        Arc::new(InMemoryCodeStore::new()),
        Arc::new(SmsDispatcher::new(LogSmsService::quiet())),
        clock.clone(),
        VerificationServiceConfig::default(),
    ));

    service.request_code("010-1234-5678").await.unwrap();
    assert_eq!(service.pending_count().await.unwrap(), 1);

    let handle = spawn_expiry_sweep(service.clone(), std::time::Duration::from_secs(60));

    // Not expired yet, sweep leaves it alone
    tokio::time::sleep(std::time::Duration::from_secs(61)).await;
    assert_eq!(service.pending_count().await.unwrap(), 1);

    clock.advance(Duration::minutes(6));
    tokio::time::sleep(std::time::Duration::from_secs(60)).await;
    assert_eq!(service.pending_count().await.unwrap(), 0);

    handle.abort();
}
