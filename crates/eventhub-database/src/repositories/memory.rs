//! In-memory event store for tests and local development.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use eventhub_core::result::AppResult;
use eventhub_entity::event::{Event, EventData};

use crate::store::EventStore;

#[derive(Debug, Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Event>,
}

/// Event store keeping rows in a `BTreeMap` so listings come back in id order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryEventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Whether the store holds no rows.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn collect<'a>(rows: impl Iterator<Item = &'a Event>) -> Vec<Event> {
    rows.cloned().collect()
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn insert(&self, data: &EventData) -> AppResult<Event> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let now = Utc::now();
        let fields = data.fields.clone();
        let event = Event {
            id: table.next_id,
            user_id: fields.user_id,
            title: fields.title,
            start_time: fields.start_time,
            end_time: fields.end_time,
            category: fields.category,
            description: fields.description,
            theme: data.theme.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(event.id, event.clone());
        Ok(event)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Event>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Event>> {
        Ok(collect(self.table.read().await.rows.values()))
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Event>> {
        let table = self.table.read().await;
        Ok(collect(table.rows.values().filter(|e| e.user_id == user_id)))
    }

    async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Event>> {
        let table = self.table.read().await;
        Ok(collect(table.rows.values().filter(|e| ids.contains(&e.id))))
    }

    async fn find_by_user_ids(&self, user_ids: &[i64]) -> AppResult<Vec<Event>> {
        let table = self.table.read().await;
        Ok(collect(
            table.rows.values().filter(|e| user_ids.contains(&e.user_id)),
        ))
    }

    async fn update(&self, id: i64, data: &EventData) -> AppResult<Option<Event>> {
        let mut table = self.table.write().await;
        let Some(event) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        let fields = data.fields.clone();
        event.user_id = fields.user_id;
        event.title = fields.title;
        event.category = fields.category;
        event.description = fields.description;
        event.start_time = fields.start_time;
        event.end_time = fields.end_time;
        event.theme = data.theme.clone();
        event.updated_at = Utc::now();
        Ok(Some(event.clone()))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn delete_by_ids(&self, ids: &[i64]) -> AppResult<u64> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|id, _| !ids.contains(id));
        Ok((before - table.rows.len()) as u64)
    }

    async fn delete_by_user_ids(&self, user_ids: &[i64]) -> AppResult<u64> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|_, e| !user_ids.contains(&e.user_id));
        Ok((before - table.rows.len()) as u64)
    }
}
