//! Event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A scheduled event, optionally carrying an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique, system-generated identifier.
    pub id: i64,
    /// Owning user (lives in the identity service).
    pub user_id: i64,
    /// Title.
    pub title: String,
    /// When the event starts.
    pub start_time: DateTime<Utc>,
    /// When the event ends.
    pub end_time: DateTime<Utc>,
    /// Free-text category.
    pub category: String,
    /// Free-text description.
    pub description: String,
    /// Relative path of the event image; empty when there is none.
    pub theme: String,
    /// When the row was inserted.
    pub created_at: DateTime<Utc>,
    /// When the row was last mutated.
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Whether the event references an image file.
    pub fn has_image(&self) -> bool {
        !self.theme.is_empty()
    }
}

/// The attributes a client supplies on create and update.
///
/// Updates replace all of them wholesale; an empty string is a value, not
/// "leave unchanged".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFields {
    /// Owning user.
    pub user_id: i64,
    /// Title.
    pub title: String,
    /// Category.
    pub category: String,
    /// Description.
    pub description: String,
    /// Start time.
    pub start_time: DateTime<Utc>,
    /// End time.
    pub end_time: DateTime<Utc>,
}

/// Everything an event store writes for one row: the client fields plus the
/// theme path chosen by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    /// Client-supplied attributes.
    #[serde(flatten)]
    pub fields: EventFields,
    /// Relative image path, or empty.
    pub theme: String,
}

impl EventData {
    /// Pair client fields with a theme path.
    pub fn new(fields: EventFields, theme: impl Into<String>) -> Self {
        Self {
            fields,
            theme: theme.into(),
        }
    }
}
