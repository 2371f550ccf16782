//! SMS Service Interface
//!
//! Defines the trait for SMS service implementations that handle
//! sending verification codes and other SMS messages.

use async_trait::async_trait;
use crate::InfrastructureError;

/// SMS service trait for sending text messages
#[async_trait]
pub trait SmsService: Send + Sync {
    /// Send an SMS message to a phone number
    ///
    /// # Arguments
    ///
    /// * `phone_number` - The recipient's phone number (`01X-XXXX-XXXX`)
    /// * `message` - The message content to send
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Unique identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError>;

    /// Send a verification code via SMS
    ///
    /// Formats the code with [`verification_message`] and sends it.
    async fn send_verification_code(&self, phone_number: &str, code: &str) -> Result<String, InfrastructureError> {
        self.send_sms(phone_number, &verification_message(code)).await
    }

    /// Get the service provider name
    fn provider_name(&self) -> &str;
}

/// Standard text of a verification code message
pub fn verification_message(code: &str) -> String {
    format!("[인증번호] {} 를 입력해주세요. 5분간 유효합니다.", code)
}
