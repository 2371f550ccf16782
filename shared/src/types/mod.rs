//! Type definitions shared between the service and its HTTP surface
//!
//! - `response` - the `{success, message, data}` envelope and health checks

pub mod response;

pub use response::{ApiResponse, HealthResponse, HealthStatus};
