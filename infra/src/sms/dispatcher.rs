//! Adapter from an SMS service to the verification code dispatcher

use async_trait::async_trait;

use pv_core::services::verification::CodeDispatcher;

use super::sms_service::SmsService;

/// Adapter that implements the core `CodeDispatcher` for any SMS service
pub struct SmsDispatcher<S: SmsService> {
    inner: S,
}

impl<S: SmsService> SmsDispatcher<S> {
    /// Wrap an SMS service
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped SMS service
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: SmsService> CodeDispatcher for SmsDispatcher<S> {
    async fn dispatch_code(&self, phone_number: &str, code: &str) -> Result<String, String> {
        self.inner
            .send_verification_code(phone_number, code)
            .await
            .map_err(|e| e.to_string())
    }
}
