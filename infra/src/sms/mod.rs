//! SMS Service Module
//!
//! Delivery of verification codes. No real gateway is wired in: the
//! [`LogSmsService`] writes each message to the operational log, and
//! [`SmsDispatcher`] plugs any [`SmsService`] into the verification service.

pub mod dispatcher;
pub mod log_sms;
pub mod sms_service;

pub use dispatcher::SmsDispatcher;
pub use log_sms::LogSmsService;
pub use sms_service::{verification_message, SmsService};

#[cfg(test)]
mod tests;
