//! PostgreSQL event store.

use async_trait::async_trait;
use sqlx::PgPool;

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;
use eventhub_entity::event::{Event, EventData};

use crate::store::EventStore;

/// Event store backed by the `events` table.
#[derive(Debug, Clone)]
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    /// Create a new event store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Persistence, message, e)
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn insert(&self, data: &EventData) -> AppResult<Event> {
        let fields = &data.fields;
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (user_id, title, category, description, start_time, end_time, theme) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(fields.user_id)
        .bind(&fields.title)
        .bind(&fields.category)
        .bind(&fields.description)
        .bind(fields.start_time)
        .bind(fields.end_time)
        .bind(&data.theme)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create event"))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find event"))
    }

    async fn find_all(&self) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list events"))
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE user_id = $1 ORDER BY id ASC")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list events by user"))
    }

    async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = ANY($1) ORDER BY id ASC")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to find events by ids"))
    }

    async fn find_by_user_ids(&self, user_ids: &[i64]) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE user_id = ANY($1) ORDER BY id ASC",
        )
        .bind(user_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to find events by user ids"))
    }

    async fn update(&self, id: i64, data: &EventData) -> AppResult<Option<Event>> {
        let fields = &data.fields;
        sqlx::query_as::<_, Event>(
            "UPDATE events SET user_id = $2, title = $3, category = $4, description = $5, \
             start_time = $6, end_time = $7, theme = $8, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(fields.user_id)
        .bind(&fields.title)
        .bind(&fields.category)
        .bind(&fields.description)
        .bind(fields.start_time)
        .bind(fields.end_time)
        .bind(&data.theme)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update event"))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete event"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_ids(&self, ids: &[i64]) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM events WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete events by ids"))?;
        Ok(result.rows_affected())
    }

    async fn delete_by_user_ids(&self, user_ids: &[i64]) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM events WHERE user_id = ANY($1)")
            .bind(user_ids)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete events by user ids"))?;
        Ok(result.rows_affected())
    }
}
