use serde::{Deserialize, Serialize};

use pv_core::services::verification::IssuedCode;

/// A body field that should be a JSON string
///
/// Values of any other JSON type are kept instead of failing extraction, so
/// the handler can answer with the domain error for a bad value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextField {
    Text(String),
    Other(serde_json::Value),
}

impl TextField {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TextField::Text(text) => Some(text),
            TextField::Other(_) => None,
        }
    }

    /// Present with content: a non-empty string or any non-string value
    pub fn is_filled(&self) -> bool {
        match self {
            TextField::Text(text) => !text.is_empty(),
            TextField::Other(_) => true,
        }
    }
}

fn text_or_empty(field: &Option<TextField>) -> &str {
    field.as_ref().and_then(TextField::as_text).unwrap_or_default()
}

/// Body of `POST /api/auth/send-verification`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendVerificationRequest {
    /// Phone number in `01X-XXXX-XXXX` form
    #[serde(default)]
    pub phone_number: Option<TextField>,
}

impl SendVerificationRequest {
    /// The phone number as text; missing and non-string values read as empty
    pub fn phone_number(&self) -> &str {
        text_or_empty(&self.phone_number)
    }
}

/// Body of `POST /api/auth/verify-code`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeRequest {
    #[serde(default)]
    pub phone_number: Option<TextField>,

    /// 6-digit verification code
    #[serde(default)]
    pub code: Option<TextField>,
}

impl VerifyCodeRequest {
    pub fn phone_number(&self) -> &str {
        text_or_empty(&self.phone_number)
    }

    pub fn code(&self) -> &str {
        text_or_empty(&self.code)
    }

    /// Both fields are filled but at least one is not a string
    ///
    /// Such a pair can never match a stored code.
    pub fn has_non_text_value(&self) -> bool {
        let filled = |field: &Option<TextField>| field.as_ref().is_some_and(TextField::is_filled);
        let text = |field: &Option<TextField>| field.as_ref().and_then(TextField::as_text).is_some();

        filled(&self.phone_number)
            && filled(&self.code)
            && !(text(&self.phone_number) && text(&self.code))
    }
}

/// Data returned once a code has been issued. Never includes the code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendVerificationResponse {
    pub phone_number: String,
    /// Expiry as milliseconds since the Unix epoch
    pub expires_at: i64,
}

impl From<IssuedCode> for SendVerificationResponse {
    fn from(issued: IssuedCode) -> Self {
        Self {
            expires_at: issued.expires_at_millis(),
            phone_number: issued.phone_number,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub verified: bool,
}
