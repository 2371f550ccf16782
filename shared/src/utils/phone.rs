//! Phone number utilities
//!
//! Only the domestic mobile format is accepted: `01X-XXX(X)-XXXX`, hyphens
//! included. Numbers are used as store keys exactly as given, so no
//! normalization happens here.

use once_cell::sync::Lazy;
use regex::Regex;

// Domestic mobile number with hyphen-separated groups
static REGIONAL_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^01[0-9]-\d{3,4}-\d{4}$").expect("regional mobile pattern is valid")
});

/// Check if a phone number matches the canonical regional format
pub fn is_valid_regional_phone(phone: &str) -> bool {
    REGIONAL_MOBILE_REGEX.is_match(phone)
}

/// Mask a phone number for logging
///
/// Keeps the carrier prefix and the last group, hiding the middle group:
/// `010-1234-5678` becomes `010-****-5678`. Anything that does not look like
/// a grouped number keeps only its last four characters.
pub fn mask_phone_number(phone: &str) -> String {
    let groups: Vec<&str> = phone.split('-').collect();
    if groups.len() == 3 {
        return format!("{}-{}-{}", groups[0], "*".repeat(groups[1].len()), groups[2]);
    }

    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}
