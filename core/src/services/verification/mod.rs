//! Verification service module for SMS-based phone verification
//!
//! This module provides the verification code lifecycle:
//! - Code generation and time-boxed storage, one entry per phone number
//! - Out-of-band delivery through an injected dispatcher
//! - Validation with one-time consumption and lazy expiry
//! - Per-number serialization of concurrent requests

mod clock;
mod config;
mod key_locks;
mod service;
mod traits;
mod types;


pub use clock::{ManualTimeSource, SystemTimeSource, TimeSource};
pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use traits::{CodeDispatcher, CodeStore};
pub use types::{CodeCheck, IssuedCode};
