//! Persistence seam for events.

use async_trait::async_trait;

use eventhub_core::result::AppResult;
use eventhub_entity::event::{Event, EventData};

/// Storage of event rows.
///
/// Every failure is reported as an [`ErrorKind::Persistence`] error with
/// the driver error kept as its source.
///
/// [`ErrorKind::Persistence`]: eventhub_core::error::ErrorKind::Persistence
#[async_trait]
pub trait EventStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a row and return it with its generated id and timestamps.
    async fn insert(&self, data: &EventData) -> AppResult<Event>;

    /// Find an event by id.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Event>>;

    /// List every event, ordered by id.
    async fn find_all(&self) -> AppResult<Vec<Event>>;

    /// List the events owned by one user, ordered by id.
    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Event>>;

    /// Find the events whose id is in `ids`.
    async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Event>>;

    /// Find the events owned by any of `user_ids`.
    async fn find_by_user_ids(&self, user_ids: &[i64]) -> AppResult<Vec<Event>>;

    /// Replace every writable column of the row and bump `updated_at`.
    ///
    /// Returns `None` when no row has this id.
    async fn update(&self, id: i64, data: &EventData) -> AppResult<Option<Event>>;

    /// Delete one row. Returns `true` if a row was removed.
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;

    /// Delete the rows whose id is in `ids`. Returns the number removed.
    async fn delete_by_ids(&self, ids: &[i64]) -> AppResult<u64>;

    /// Delete the rows owned by any of `user_ids`. Returns the number removed.
    async fn delete_by_user_ids(&self, user_ids: &[i64]) -> AppResult<u64>;
}
