//! Verification entry entity for SMS-based phone verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Smallest code that can be issued
pub const CODE_MIN: u32 = 100_000;

/// Largest code that can be issued
pub const CODE_MAX: u32 = 999_999;

/// Default expiration time for verification codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// One outstanding verification challenge for a phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationEntry {
    /// Phone number the code was issued for, in canonical `01X-XXXX-XXXX` form
    pub phone_number: String,

    /// The 6-digit verification code
    pub code: String,

    /// Timestamp when the code was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp after which the code is no longer accepted
    pub expires_at: DateTime<Utc>,
}

impl VerificationEntry {
    /// Issues a new entry with a freshly generated code
    ///
    /// # Arguments
    ///
    /// * `phone_number` - The phone number the code is bound to
    /// * `now` - Issue time
    /// * `ttl` - How long the code stays valid
    pub fn issue(phone_number: String, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self::with_code(phone_number, Self::generate_code(), now, ttl)
    }

    /// Builds an entry around an existing code
    pub fn with_code(phone_number: String, code: String, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            phone_number,
            code,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Generates a random code uniformly in `[CODE_MIN, CODE_MAX]` from the OS CSPRNG
    ///
    /// The lower bound keeps every code at exactly six digits without padding.
    pub fn generate_code() -> String {
        let mut rng = OsRng;
        rng.gen_range(CODE_MIN..=CODE_MAX).to_string()
    }

    /// Checks whether the entry has expired at `now`
    ///
    /// The expiry instant itself still counts as valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Compares a candidate code with the stored one
    ///
    /// Exact byte equality, no trimming or normalization. The comparison runs
    /// in constant time for equal-length inputs.
    pub fn matches(&self, candidate: &str) -> bool {
        if candidate.len() != self.code.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }

    /// Expiry as milliseconds since the Unix epoch
    pub fn expires_at_millis(&self) -> i64 {
        self.expires_at.timestamp_millis()
    }

    /// Time remaining until expiration, or zero if already expired
    pub fn time_until_expiration(&self, now: DateTime<Utc>) -> Duration {
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}
