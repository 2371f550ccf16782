//! Application factory
//!
//! Builds the Actix-web application around an already-constructed
//! verification service. The binary and the HTTP tests share this wiring.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::InternalError,
    web, App, HttpRequest,
};
use tracing_actix_web::TracingLogger;

use pv_core::services::verification::{CodeDispatcher, CodeStore};
use pv_shared::AppConfig;

use crate::handlers::{health_check, internal_error_response, not_found_response};
use crate::i18n::Language;
use crate::middleware::create_cors;
use crate::routes::auth::{self, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<S, D>(
    app_state: web::Data<AppState<S, D>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: CodeStore + ?Sized + 'static,
    D: CodeDispatcher + ?Sized + 'static,
{
    // Unreadable bodies are answered like any other unexpected failure
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(|err, req: &HttpRequest| {
            let lang = Language::from_request(req);
            tracing::warn!(error = %err, path = %req.path(), "Rejected unreadable JSON body");
            InternalError::from_response(err, internal_error_response(lang)).into()
        });

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .wrap(create_cors(&config.cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(web::scope("/api/auth").configure(auth::configure::<S, D>))
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found(req: HttpRequest) -> actix_web::HttpResponse {
    not_found_response(Language::from_request(&req))
}
