//! Unit tests for verification entry entity

use chrono::{Duration, TimeZone, Utc};
use std::collections::HashSet;

use crate::domain::entities::verification_code::{
    VerificationEntry, CODE_LENGTH, CODE_MAX, CODE_MIN, DEFAULT_EXPIRATION_MINUTES,
};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

#[test]
fn test_issue_entry() {
    let now = fixed_now();
    let entry = VerificationEntry::issue(
        "010-1234-5678".to_string(),
        now,
        Duration::minutes(DEFAULT_EXPIRATION_MINUTES),
    );

    assert_eq!(entry.phone_number, "010-1234-5678");
    assert_eq!(entry.code.len(), CODE_LENGTH);
    assert_eq!(entry.created_at, now);
    assert_eq!(entry.expires_at, now + Duration::minutes(5));
    assert_eq!(entry.expires_at_millis() - now.timestamp_millis(), 300_000);
}

#[test]
fn test_generate_code_range() {
    for _ in 0..1000 {
        let code = VerificationEntry::generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_digit()));

        let num: u32 = code.parse().expect("Generated code should be a valid number");
        assert!((CODE_MIN..=CODE_MAX).contains(&num));
    }
}

#[test]
fn test_code_uniqueness() {
    let codes: HashSet<String> = (0..100).map(|_| VerificationEntry::generate_code()).collect();

    // Extremely unlikely to draw the same code 100 times
    assert!(codes.len() > 1);
}

#[test]
fn test_expiry_boundary() {
    let now = fixed_now();
    let entry = VerificationEntry::with_code(
        "010-1234-5678".to_string(),
        "123456".to_string(),
        now,
        Duration::minutes(5),
    );

    assert!(!entry.is_expired_at(now));
    assert!(!entry.is_expired_at(entry.expires_at));
    assert!(entry.is_expired_at(entry.expires_at + Duration::milliseconds(1)));
}

#[test]
fn test_matches_is_exact() {
    let entry = VerificationEntry::with_code(
        "010-1234-5678".to_string(),
        "123456".to_string(),
        fixed_now(),
        Duration::minutes(5),
    );

    assert!(entry.matches("123456"));
    assert!(!entry.matches("654321"));
    assert!(!entry.matches(" 123456"));
    assert!(!entry.matches("123456 "));
    assert!(!entry.matches("12345"));
    assert!(!entry.matches(""));
}

#[test]
fn test_time_until_expiration() {
    let now = fixed_now();
    let entry = VerificationEntry::with_code(
        "010-1234-5678".to_string(),
        "123456".to_string(),
        now,
        Duration::minutes(5),
    );

    assert_eq!(entry.time_until_expiration(now), Duration::minutes(5));
    assert_eq!(
        entry.time_until_expiration(now + Duration::minutes(2)),
        Duration::minutes(3)
    );
    assert_eq!(
        entry.time_until_expiration(now + Duration::minutes(10)),
        Duration::zero()
    );
}

#[test]
fn test_serialization() {
    let entry = VerificationEntry::issue("010-1234-5678".to_string(), fixed_now(), Duration::minutes(5));

    let json = serde_json::to_string(&entry).unwrap();
    let deserialized: VerificationEntry = serde_json::from_str(&json).unwrap();

    assert_eq!(entry, deserialized);
}
