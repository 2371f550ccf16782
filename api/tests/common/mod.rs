//! Shared fixtures for HTTP tests

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

use actix_web::web;
use pv_api::AppState;
use pv_core::services::verification::{
    CodeDispatcher, ManualTimeSource, VerificationService, VerificationServiceConfig,
};
use pv_infra::InMemoryCodeStore;

/// Dispatcher that remembers the last code sent to each number
#[derive(Default)]
pub struct RecordingDispatcher {
    codes: Mutex<HashMap<String, String>>,
    sent: AtomicUsize,
    delivered: Notify,
}

impl RecordingDispatcher {
    pub fn code_for(&self, phone: &str) -> Option<String> {
        self.codes.lock().unwrap().get(phone).cloned()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.load(Ordering::SeqCst)
    }

    /// Wait until `count` codes have gone out in total
    ///
    /// Delivery runs in the background after the response is written.
    pub async fn wait_for_sent(&self, count: usize) {
        let wait = async {
            loop {
                let delivered = self.delivered.notified();
                if self.sent_count() >= count {
                    return;
                }
                delivered.await;
            }
        };
        tokio::time::timeout(Duration::from_secs(5), wait)
            .await
            .expect("code should have been dispatched");
    }

    /// Wait for the `count`-th delivery and return the latest code for `phone`
    pub async fn delivered_code(&self, phone: &str, count: usize) -> String {
        self.wait_for_sent(count).await;
        self.code_for(phone).expect("code should have been recorded")
    }
}

#[async_trait]
impl CodeDispatcher for RecordingDispatcher {
    async fn dispatch_code(&self, phone_number: &str, code: &str) -> Result<String, String> {
        self.codes
            .lock()
            .unwrap()
            .insert(phone_number.to_string(), code.to_string());
        self.sent.fetch_add(1, Ordering::SeqCst);
        self.delivered.notify_waiters();
        Ok(format!("test-{}", phone_number))
    }
}

pub type TestState = AppState<InMemoryCodeStore, RecordingDispatcher>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub dispatcher: Arc<RecordingDispatcher>,
    pub clock: Arc<ManualTimeSource>,
}

pub fn test_context() -> TestContext {
    let dispatcher = Arc::new(RecordingDispatcher::default());
    let clock = Arc::new(ManualTimeSource::new(
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
    ));
    let service = Arc::new(VerificationService::with_time_source(
        Arc::new(InMemoryCodeStore::new()),
        dispatcher.clone(),
        clock.clone(),
        VerificationServiceConfig::default(),
    ));

    TestContext {
        state: web::Data::new(AppState::new(service)),
        dispatcher,
        clock,
    }
}

/// A six-digit code guaranteed to differ from `code`
pub fn wrong_code(code: &str) -> &'static str {
    if code == "123456" {
        "654321"
    } else {
        "123456"
    }
}
