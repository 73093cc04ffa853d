//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use eventhub_auth::Authenticator;
use eventhub_core::config::AppConfig;
use eventhub_service::EventService;

/// Shared application state passed to every handler via Axum's `State`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Event lifecycle service.
    pub event_service: Arc<EventService>,
    /// Request authentication.
    pub authenticator: Arc<Authenticator>,
}

impl AppState {
    /// Creates the state from its parts.
    pub fn new(
        config: Arc<AppConfig>,
        event_service: Arc<EventService>,
        authenticator: Arc<Authenticator>,
    ) -> Self {
        Self {
            config,
            event_service,
            authenticator,
        }
    }
}
