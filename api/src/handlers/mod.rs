pub mod error;
pub mod health;

pub use error::*;
pub use health::health_check;
