//! Embedded schema migrations from the workspace `migrations/` directory.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply every migration the database has not seen yet.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Persistence, "Failed to run migrations", e))?;

    info!(count = MIGRATOR.iter().count(), "Schema up to date");
    Ok(())
}
