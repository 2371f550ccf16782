//! Conversion of domain errors into HTTP responses

use actix_web::HttpResponse;

use pv_core::errors::DomainError;
use pv_shared::{error_codes, ApiResponse};

use crate::dto::VerifyCodeResponse;
use crate::i18n::{keys, message, Language};

/// Handle domain errors with language support
///
/// Client errors map to 400, everything else to 500. The message is localized;
/// the `error` field carries the stable code from `DomainError::error_code`.
pub fn handle_domain_error_with_lang(error: &DomainError, lang: Language) -> HttpResponse {
    match error {
        DomainError::InvalidPhoneNumber { .. } => HttpResponse::BadRequest().json(
            ApiResponse::<()>::failure(error.error_code(), message(keys::INVALID_PHONE_NUMBER, lang)),
        ),
        DomainError::MissingInput { field } => {
            tracing::debug!(field = %field, "Request missing required input");
            HttpResponse::BadRequest().json(ApiResponse::<()>::failure(
                error.error_code(),
                message(keys::MISSING_INPUT, lang),
            ))
        }
        DomainError::CodeInvalidOrExpired => HttpResponse::BadRequest().json(
            ApiResponse::failure(error.error_code(), message(keys::CODE_INVALID_OR_EXPIRED, lang))
                .with_data(VerifyCodeResponse { verified: false }),
        ),
        DomainError::Internal { message: detail } => {
            tracing::error!(error = %detail, "Internal error while handling request");
            internal_error_response(lang)
        }
    }
}

/// Generic 500 envelope that leaks no detail
pub fn internal_error_response(lang: Language) -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::<()>::failure(
        error_codes::INTERNAL_ERROR,
        message(keys::INTERNAL_ERROR, lang),
    ))
}

/// 404 envelope for unknown routes
pub fn not_found_response(lang: Language) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::failure(
        error_codes::NOT_FOUND,
        message(keys::NOT_FOUND, lang),
    ))
}
