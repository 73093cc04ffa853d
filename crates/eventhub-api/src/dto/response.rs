//! Response DTOs.

use serde::{Deserialize, Serialize};

use eventhub_entity::event::Event;

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeResponse {
    /// Greeting.
    pub message: String,
    /// Always `"success"`.
    pub status: String,
}

/// Body of a successful create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventResponse {
    /// Message.
    pub message: String,
    /// Relative path of the stored image.
    pub image: String,
    /// The created event.
    pub event: Event,
}

/// Body of a successful update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEventResponse {
    /// Message.
    pub message: String,
    /// The updated event.
    pub event: Event,
}

/// Body of a successful bulk delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteEventsResponse {
    /// Message.
    pub message: String,
    /// Number of events removed.
    pub deleted: u64,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
