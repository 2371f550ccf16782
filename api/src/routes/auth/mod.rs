//! Phone verification route handlers
//!
//! - `POST /api/auth/send-verification` issues a code and dispatches it
//! - `POST /api/auth/verify-code` checks a submitted code

pub mod send_verification;
pub mod verify_code;

use actix_web::web;
use std::sync::Arc;

use pv_core::services::verification::{CodeDispatcher, CodeStore, VerificationService};

pub use send_verification::send_verification;
pub use verify_code::verify_code;

/// Application state that holds shared services
pub struct AppState<S, D>
where
    S: CodeStore + ?Sized,
    D: CodeDispatcher + ?Sized,
{
    pub verification_service: Arc<VerificationService<S, D>>,
}

impl<S, D> AppState<S, D>
where
    S: CodeStore + ?Sized,
    D: CodeDispatcher + ?Sized,
{
    pub fn new(verification_service: Arc<VerificationService<S, D>>) -> Self {
        Self {
            verification_service,
        }
    }
}

/// Register the auth routes under the current scope
pub fn configure<S, D>(cfg: &mut web::ServiceConfig)
where
    S: CodeStore + ?Sized + 'static,
    D: CodeDispatcher + ?Sized + 'static,
{
    cfg.route("/send-verification", web::post().to(send_verification::<S, D>))
        .route("/verify-code", web::post().to(verify_code::<S, D>));
}
