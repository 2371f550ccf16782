//! Time sources for expiry decisions

use chrono::{DateTime, Duration, Utc};
use std::sync::RwLock;

/// Source of the current time
///
/// Abstracted so expiry can be tested with a deterministic clock.
pub trait TimeSource: Send + Sync {
    /// Returns the current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Default system time source
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for tests and simulations
#[derive(Debug)]
pub struct ManualTimeSource {
    time: RwLock<DateTime<Utc>>,
}

impl ManualTimeSource {
    /// Create a clock frozen at `start`
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            time: RwLock::new(start),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let mut time = self.time.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *time = *time + by;
    }

    /// Jump to an absolute instant
    pub fn set(&self, to: DateTime<Utc>) {
        *self.time.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = to;
    }
}

impl Default for ManualTimeSource {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> DateTime<Utc> {
        *self.time.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
