use actix_web::{web, HttpRequest, HttpResponse};

use pv_core::services::verification::{CodeDispatcher, CodeStore};
use pv_shared::phone::mask_phone_number;
use pv_shared::ApiResponse;

use crate::dto::{SendVerificationRequest, SendVerificationResponse};
use crate::handlers::error::handle_domain_error_with_lang;
use crate::i18n::{keys, message, Language};
use crate::middleware::request_id;

use super::AppState;

/// Handler for POST /api/auth/send-verification
///
/// Issues a fresh 6-digit code for the phone number, replacing any pending
/// one, and hands it to the SMS dispatcher.
///
/// # Request Body
///
/// ```json
/// { "phoneNumber": "010-1234-5678" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "message": "인증번호가 발송되었습니다.",
///     "data": { "phoneNumber": "010-1234-5678", "expiresAt": 1714554300000 }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing or malformed phone number (`INVALID_PHONE_NUMBER`)
/// - 500 Internal Server Error: store failure (`INTERNAL_ERROR`)
pub async fn send_verification<S, D>(
    req: HttpRequest,
    state: web::Data<AppState<S, D>>,
    request: web::Json<SendVerificationRequest>,
) -> HttpResponse
where
    S: CodeStore + ?Sized + 'static,
    D: CodeDispatcher + ?Sized + 'static,
{
    let request_id = request_id(&req);
    let lang = Language::from_request(&req);

    // Missing and non-string numbers fail the same format check as a malformed one
    let phone_number = request.phone_number().to_string();

    tracing::info!(
        request_id = %request_id,
        phone = %mask_phone_number(&phone_number),
        "Processing send-verification request"
    );

    match state.verification_service.request_code(&phone_number).await {
        Ok(issued) => HttpResponse::Ok().json(ApiResponse::success(
            message(keys::CODE_SENT, lang),
            SendVerificationResponse::from(issued),
        )),
        Err(error) => {
            tracing::warn!(
                request_id = %request_id,
                phone = %mask_phone_number(&phone_number),
                error = %error,
                "Send-verification request failed"
            );
            handle_domain_error_with_lang(&error, lang)
        }
    }
}
