//! Localized response messages
//!
//! Messages are embedded at compile time from `i18n/messages.toml` and looked
//! up by key. Korean is the default language; English is served when the
//! client's `Accept-Language` prefers it.

use actix_web::{http::header, HttpRequest};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

/// Message keys shared by handlers and the error mapper
pub mod keys {
    pub const CODE_SENT: &str = "code_sent";
    pub const CODE_VERIFIED: &str = "code_verified";
    pub const INVALID_PHONE_NUMBER: &str = "invalid_phone_number";
    pub const MISSING_INPUT: &str = "missing_input";
    pub const CODE_INVALID_OR_EXPIRED: &str = "code_invalid_or_expired";
    pub const INTERNAL_ERROR: &str = "internal_error";
    pub const NOT_FOUND: &str = "not_found";
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedMessage {
    pub ko: String,
    pub en: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageCatalog {
    #[serde(default)]
    pub messages: HashMap<String, LocalizedMessage>,
}

pub static MESSAGES: Lazy<MessageCatalog> = Lazy::new(|| {
    let embedded = include_str!("../../i18n/messages.toml");
    toml::from_str(embedded).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to parse embedded message catalog");
        MessageCatalog::default()
    })
});

/// Language preference for response messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Korean,
    English,
}

impl Language {
    /// Detect language preference from the Accept-Language header
    pub fn from_request(req: &HttpRequest) -> Self {
        req.headers()
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .map(Self::from_header)
            .unwrap_or_default()
    }

    /// Pick the supported language with the highest quality value
    ///
    /// Example: "en-US,en;q=0.9,ko;q=0.8" resolves to English.
    pub fn from_header(header_str: &str) -> Self {
        let mut preferred = Language::default();
        let mut max_quality = 0.0_f32;

        for part in header_str.split(',') {
            let mut pieces = part.trim().split(';');
            let tag = pieces.next().unwrap_or_default().trim().to_lowercase();
            let quality = pieces
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);

            let language = if tag.starts_with("ko") {
                Language::Korean
            } else if tag.starts_with("en") {
                Language::English
            } else {
                continue;
            };

            if quality > max_quality {
                preferred = language;
                max_quality = quality;
            }
        }

        preferred
    }
}

/// Localized text for `key`, or the key itself when it is unknown
pub fn message(key: &str, lang: Language) -> String {
    match MESSAGES.messages.get(key) {
        Some(msg) => match lang {
            Language::Korean => msg.ko.clone(),
            Language::English => msg.en.clone(),
        },
        None => {
            tracing::warn!(key = key, "Missing localized message");
            key.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_catalog_has_every_key() {
        for key in [
            keys::CODE_SENT,
            keys::CODE_VERIFIED,
            keys::INVALID_PHONE_NUMBER,
            keys::MISSING_INPUT,
            keys::CODE_INVALID_OR_EXPIRED,
            keys::INTERNAL_ERROR,
            keys::NOT_FOUND,
        ] {
            let msg = MESSAGES.messages.get(key).expect("message should exist");
            assert!(!msg.ko.is_empty());
            assert!(!msg.en.is_empty());
        }
    }

    #[test]
    fn test_message_lookup() {
        assert_eq!(message(keys::CODE_SENT, Language::Korean), "인증번호가 발송되었습니다.");
        assert_eq!(message(keys::CODE_SENT, Language::English), "Verification code has been sent.");
        assert_eq!(message("no_such_key", Language::English), "no_such_key");
    }

    #[test]
    fn test_language_from_header() {
        assert_eq!(Language::from_header("ko-KR,ko;q=0.9"), Language::Korean);
        assert_eq!(Language::from_header("en-US,en;q=0.9"), Language::English);
        assert_eq!(Language::from_header("ko;q=0.5,en;q=0.8"), Language::English);
        assert_eq!(Language::from_header("en;q=0.5,ko;q=0.8"), Language::Korean);
        assert_eq!(Language::from_header("fr-FR,de;q=0.9"), Language::Korean);
        assert_eq!(Language::from_header(""), Language::Korean);
    }

    #[test]
    fn test_language_from_request() {
        let req = TestRequest::default()
            .insert_header((header::ACCEPT_LANGUAGE, "en"))
            .to_http_request();
        assert_eq!(Language::from_request(&req), Language::English);

        let req = TestRequest::default().to_http_request();
        assert_eq!(Language::from_request(&req), Language::Korean);
    }
}
