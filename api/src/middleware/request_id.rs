//! Request identifiers for log correlation

use actix_web::{HttpMessage, HttpRequest};
use tracing_actix_web::RequestId;
use uuid::Uuid;

/// Request id assigned by the tracing middleware, or a fresh one when the
/// handler runs without it
pub fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|id| id.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
