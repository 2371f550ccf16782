use actix_web::{web, HttpRequest, HttpResponse};

use pv_core::errors::DomainError;
use pv_core::services::verification::{CodeDispatcher, CodeStore};
use pv_shared::phone::mask_phone_number;
use pv_shared::ApiResponse;

use crate::dto::{VerifyCodeRequest, VerifyCodeResponse};
use crate::handlers::error::handle_domain_error_with_lang;
use crate::i18n::{keys, message, Language};
use crate::middleware::request_id;

use super::AppState;

/// Handler for POST /api/auth/verify-code
///
/// Checks the submitted code. A correct, unexpired code is consumed; a wrong
/// one can be retried until the code expires.
///
/// # Request Body
///
/// ```json
/// { "phoneNumber": "010-1234-5678", "code": "482913" }
/// ```
///
/// ## Success (200 OK)
/// `data` is `{ "verified": true }`.
///
/// ## Errors
/// - 400 Bad Request: phone number or code missing (`MISSING_INPUT`)
/// - 400 Bad Request: no pending code, expired, mismatch, or a non-string
///   value (`CODE_INVALID_OR_EXPIRED`, `data` is `{ "verified": false }`)
/// - 500 Internal Server Error: store failure (`INTERNAL_ERROR`)
pub async fn verify_code<S, D>(
    req: HttpRequest,
    state: web::Data<AppState<S, D>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    S: CodeStore + ?Sized + 'static,
    D: CodeDispatcher + ?Sized + 'static,
{
    let request_id = request_id(&req);
    let lang = Language::from_request(&req);

    let phone_number = request.phone_number();
    let code = request.code();

    tracing::info!(
        request_id = %request_id,
        phone = %mask_phone_number(phone_number),
        "Processing verify-code request"
    );

    let outcome = if request.has_non_text_value() {
        Err(DomainError::CodeInvalidOrExpired)
    } else {
        state
            .verification_service
            .check_code(phone_number, code)
            .await
    };

    match outcome {
        Ok(check) => HttpResponse::Ok().json(ApiResponse::success(
            message(keys::CODE_VERIFIED, lang),
            VerifyCodeResponse {
                verified: check.verified,
            },
        )),
        Err(error) => {
            tracing::info!(
                request_id = %request_id,
                phone = %mask_phone_number(phone_number),
                error_code = error.error_code(),
                "Verify-code request rejected"
            );
            handle_domain_error_with_lang(&error, lang)
        }
    }
}
