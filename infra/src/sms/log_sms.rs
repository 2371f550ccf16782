//! Log-only SMS Service Implementation
//!
//! Stands in for a real SMS gateway: every message is written to the
//! operational log under the `sms_service` target and nothing leaves the
//! process.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use pv_shared::phone::{is_valid_regional_phone, mask_phone_number};

use super::sms_service::SmsService;
use crate::InfrastructureError;

/// SMS service that logs messages instead of sending them
#[derive(Clone)]
pub struct LogSmsService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to also print a banner to stdout
    console_output: bool,
}

impl LogSmsService {
    /// Create a service that logs and prints each message
    pub fn new() -> Self {
        Self::with_console_output(true)
    }

    /// Create a service that only logs
    pub fn quiet() -> Self {
        Self::with_console_output(false)
    }

    pub fn with_console_output(console_output: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for LogSmsService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsService for LogSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let masked_phone = mask_phone_number(phone_number);

        if !is_valid_regional_phone(phone_number) {
            warn!(
                target: "sms_service",
                phone = %masked_phone,
                "Refusing to send SMS to malformed number"
            );
            return Err(InfrastructureError::Sms(format!(
                "Invalid phone number format: {}",
                masked_phone
            )));
        }

        let message_id = format!("log_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("SIMULATED SMS #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", phone_number);
            println!("Message ID: {}", message_id);
            println!("Content: {}", message);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "sms_service",
            provider = self.provider_name(),
            phone = %phone_number,
            message_id = %message_id,
            content = %message,
            "SMS sent (simulated)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "log"
    }
}
