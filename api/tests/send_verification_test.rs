mod common;

use actix_web::{http::StatusCode, test};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use pv_api::create_app;
use pv_shared::AppConfig;

use common::test_context;

#[actix_web::test]
async fn test_send_verification_success() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::development())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/send-verification")
        .set_json(json!({ "phoneNumber": "010-1234-5678" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let issued_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "인증번호가 발송되었습니다.");
    assert_eq!(body["data"]["phoneNumber"], "010-1234-5678");
    assert_eq!(
        body["data"]["expiresAt"].as_i64(),
        Some(issued_at.timestamp_millis() + 300_000)
    );
    assert!(body.get("error").is_none());

    // The code only travels through the dispatcher
    let code = ctx.dispatcher.delivered_code("010-1234-5678", 1).await;
    assert!(!body.to_string().contains(&code));
}

#[actix_web::test]
async fn test_send_verification_english_message() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::development())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/send-verification")
        .insert_header(("Accept-Language", "en-US,en;q=0.9"))
        .set_json(json!({ "phoneNumber": "011-123-4567" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Verification code has been sent.");
}

#[actix_web::test]
async fn test_send_verification_invalid_phone() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::development())).await;

    for payload in [
        json!({ "phoneNumber": "123-4567-890" }),
        json!({ "phoneNumber": "01012345678" }),
        json!({ "phoneNumber": "" }),
        json!({}),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/auth/send-verification")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload {}", payload);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "INVALID_PHONE_NUMBER");
        assert_eq!(body["message"], "올바른 휴대폰 번호를 입력해주세요.");
    }

    assert_eq!(ctx.dispatcher.sent_count(), 0);
}

#[actix_web::test]
async fn test_send_verification_malformed_body() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::development())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/send-verification")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "INTERNAL_ERROR");
    assert_eq!(body["message"], "서버 오류가 발생했습니다.");
}

#[actix_web::test]
async fn test_send_verification_non_string_phone() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::development())).await;

    for payload in [
        json!({ "phoneNumber": 1012345678 }),
        json!({ "phoneNumber": ["010-1234-5678"] }),
        json!({ "phoneNumber": true }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/auth/send-verification")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload {}", payload);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "INVALID_PHONE_NUMBER");
    }

    assert_eq!(ctx.dispatcher.sent_count(), 0);
}
