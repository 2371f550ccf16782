//! # Phone Verify Core
//!
//! Core domain layer for the phone verification backend.
//! This crate contains the verification entry entity, the verification
//! service that issues and checks codes, the store/delivery/clock seams it is
//! built on, and the domain error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
