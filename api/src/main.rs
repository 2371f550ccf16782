use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;

use pv_api::{create_app, telemetry, AppState};
use pv_core::services::verification::{
    CodeDispatcher, CodeStore, VerificationService, VerificationServiceConfig,
};
use pv_infra::{spawn_expiry_sweep, InMemoryCodeStore, LogSmsService, RedisCodeStore, SmsDispatcher};
use pv_shared::{AppConfig, Environment, StoreBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Environment-specific file first, then the plain .env
    dotenvy::from_filename(Environment::from_env().env_file()).ok();
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_tracing(&config.logging)?;

    tracing::info!(
        environment = %config.environment,
        store = ?config.cache.backend,
        "Starting phone verification API server"
    );

    let store: Arc<dyn CodeStore> = match config.cache.backend {
        StoreBackend::Memory => Arc::new(InMemoryCodeStore::new()),
        StoreBackend::Redis => Arc::new(
            RedisCodeStore::connect(&config.cache)
                .await
                .context("failed to connect to the Redis code store")?,
        ),
    };
    let dispatcher: Arc<dyn CodeDispatcher> =
        Arc::new(SmsDispatcher::new(LogSmsService::new()));

    let verification_service = Arc::new(VerificationService::new(
        store,
        dispatcher,
        VerificationServiceConfig::from(&config.verification),
    ));

    let sweep = config.cache.sweep_enabled().then(|| {
        spawn_expiry_sweep(
            verification_service.clone(),
            Duration::from_secs(config.cache.sweep_interval_seconds),
        )
    });

    let app_state = web::Data::new(AppState::new(verification_service));
    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &app_config))
        .keep_alive(Duration::from_secs(config.server.keep_alive));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    if let Some(handle) = sweep {
        handle.abort();
    }

    tracing::info!("Server stopped");
    Ok(())
}
