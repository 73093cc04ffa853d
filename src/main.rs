//! EventHub server: authenticated event CRUD with image uploads.

use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, fmt};

use eventhub_core::config::{AppConfig, LogFormat, LoggingConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let env = std::env::var("EVENTHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.logging);
    tracing::info!(env = %env, "Configuration loaded");

    match eventhub_api::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over the configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = fmt().with_env_filter(filter).with_target(true);

    match logging.format {
        LogFormat::Json => builder.json().with_thread_ids(true).init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}
