//! Route definitions for the EventHub HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor. Every route sits behind the authentication middleware.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = usize::try_from(state.config.storage.max_upload_size_bytes)
        .unwrap_or(usize::MAX);
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(home_routes())
        .nest("/api/v1/event", event_routes())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Service root
fn home_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::home::home))
}

/// Event CRUD, mounted under `/api/v1/event`
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(handlers::event::create_event))
        .route("/all", get(handlers::event::list_events))
        .route("/all/user/{user_id}", get(handlers::event::list_user_events))
        .route("/user", delete(handlers::event::delete_user_events))
        .route(
            "/{id}",
            get(handlers::event::get_event)
                .put(handlers::event::update_event)
                .delete(handlers::event::delete_event),
        )
}
