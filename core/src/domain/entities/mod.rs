//! Domain entities representing core business objects.

pub mod verification_code;

#[cfg(test)]
mod tests;

pub use verification_code::{
    VerificationEntry, CODE_LENGTH, CODE_MAX, CODE_MIN, DEFAULT_EXPIRATION_MINUTES,
};
