mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use pv_api::create_app;
use pv_shared::AppConfig;

use common::test_context;

#[actix_web::test]
async fn test_full_flow_and_replay() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::development())).await;
    let phone = "010-9876-5432";

    let req = test::TestRequest::post()
        .uri("/api/auth/send-verification")
        .set_json(json!({ "phoneNumber": phone }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let code = ctx.dispatcher.delivered_code(phone, 1).await;
    let verify = || {
        test::TestRequest::post()
            .uri("/api/auth/verify-code")
            .set_json(json!({ "phoneNumber": phone, "code": code }))
            .to_request()
    };

    let resp = test::call_service(&app, verify()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // A consumed code cannot be replayed
    let resp = test::call_service(&app, verify()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "CODE_INVALID_OR_EXPIRED");
}

#[actix_web::test]
async fn test_second_request_supersedes_first() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::development())).await;
    let phone = "016-555-1212";

    let send = || {
        test::TestRequest::post()
            .uri("/api/auth/send-verification")
            .set_json(json!({ "phoneNumber": phone }))
            .to_request()
    };

    test::call_service(&app, send()).await;
    let first = ctx.dispatcher.delivered_code(phone, 1).await;
    test::call_service(&app, send()).await;
    let second = ctx.dispatcher.delivered_code(phone, 2).await;

    if first != second {
        let req = test::TestRequest::post()
            .uri("/api/auth/verify-code")
            .set_json(json!({ "phoneNumber": phone, "code": first }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-code")
        .set_json(json!({ "phoneNumber": phone, "code": second }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_health_check() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::development())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "phone-verify-api");
}

#[actix_web::test]
async fn test_unknown_route_returns_envelope() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &AppConfig::development())).await;

    let req = test::TestRequest::get().uri("/api/auth/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "NOT_FOUND");
}
