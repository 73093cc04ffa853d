//! Server bootstrap: connects the stores, builds the services and serves the
//! router until shutdown.

use std::sync::Arc;

use axum::Router;
use tracing::{error, info};

use eventhub_auth::Authenticator;
use eventhub_core::config::AppConfig;
use eventhub_core::error::{AppError, ErrorKind};
use eventhub_database::{DatabasePool, PgEventStore};
use eventhub_service::EventService;
use eventhub_storage::LocalImageStore;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the EventHub server until Ctrl-C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!("Starting EventHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database ─────────────────────────────────────────
    let db = DatabasePool::connect(&config.database).await?;
    db.migrate().await?;

    // ── Step 2: Stores and services ──────────────────────────────
    let events = Arc::new(PgEventStore::new(db.pool().clone()));
    let images = Arc::new(LocalImageStore::new(&config.storage.image_dir).await?);
    info!(
        image_dir = %images.root().display(),
        "Image store ready"
    );
    let event_service = Arc::new(EventService::new(events, images));

    // ── Step 3: Authentication ───────────────────────────────────
    let authenticator = Arc::new(Authenticator::from_config(&config.auth, &config.identity)?);
    info!(identity_url = %config.identity.base_url, "Identity resolver configured");

    // ── Step 4: HTTP server ──────────────────────────────────────
    let addr = config.server.bind_address();
    let state = AppState::new(Arc::new(config), event_service, authenticator);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;

    info!("EventHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    db.close().await;
    info!("EventHub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
