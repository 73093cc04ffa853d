//! Event lifecycle service: CRUD over event rows and their image files.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;
use eventhub_core::traits::ImageStore;
use eventhub_database::store::EventStore;
use eventhub_entity::event::{Event, EventData, EventFields};
use eventhub_storage::naming::extension_of;

use crate::context::RequestContext;

use super::outcome::{CleanupWarning, Outcome};

/// An uploaded image as received from the client.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Client-side file name; only its extension is kept.
    pub file_name: String,
    /// File content.
    pub data: Bytes,
}

impl ImageUpload {
    /// Creates an upload from a client file name and its bytes.
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            data: data.into(),
        }
    }
}

/// Result of creating an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedEvent {
    /// Relative path the image was stored under.
    pub image_path: String,
    /// The stored row.
    pub event: Event,
}

/// Orchestrates the event store and the image store so that an event's
/// `theme` always names a file that exists once an operation returns.
///
/// Image removals are best-effort: failures are logged and reported as
/// [`CleanupWarning`]s but never fail the operation.
#[derive(Debug, Clone)]
pub struct EventService {
    /// Event rows.
    events: Arc<dyn EventStore>,
    /// Event images.
    images: Arc<dyn ImageStore>,
}

impl EventService {
    /// Creates a new event service.
    pub fn new(events: Arc<dyn EventStore>, images: Arc<dyn ImageStore>) -> Self {
        Self { events, images }
    }

    /// Store the image, then insert the row pointing at it.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        fields: EventFields,
        image: Option<ImageUpload>,
    ) -> AppResult<Outcome<CreatedEvent>> {
        let image = image.ok_or_else(|| AppError::validation("Image file is required"))?;
        let image_path = self.save_image(image).await?;

        let event = match self.events.insert(&EventData::new(fields, &image_path)).await {
            Ok(event) => event,
            Err(e) => {
                self.discard_image(&image_path).await;
                return Err(e);
            }
        };

        info!(
            event_id = event.id,
            user_id = event.user_id,
            actor = ctx.user_id(),
            image = %image_path,
            "Event created"
        );

        Ok(Outcome::new(CreatedEvent { image_path, event }))
    }

    /// Fetch one event.
    pub async fn get_by_id(&self, id: i64) -> AppResult<Event> {
        self.events
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Event {id} not found")))
    }

    /// List every event, ordered by id.
    pub async fn list_all(&self) -> AppResult<Vec<Event>> {
        self.events.find_all().await
    }

    /// List the events owned by `user_id`, ordered by id.
    pub async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<Event>> {
        self.events.find_by_user(user_id).await
    }

    /// Replace the six client fields of an event and, when `image` is given,
    /// its image.
    ///
    /// The new image is written and the row persisted before the previous
    /// image is removed, so a failure never leaves the row pointing at a
    /// missing file.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        fields: EventFields,
        image: Option<ImageUpload>,
    ) -> AppResult<Outcome<Event>> {
        let existing = self.get_by_id(id).await?;

        let new_image = match image {
            Some(image) => Some(self.save_image(image).await?),
            None => None,
        };
        let theme = new_image.as_deref().unwrap_or(&existing.theme);

        let updated = match self.events.update(id, &EventData::new(fields, theme)).await {
            Ok(Some(event)) => event,
            Ok(None) => {
                if let Some(path) = &new_image {
                    self.discard_image(path).await;
                }
                return Err(AppError::not_found(format!("Event {id} not found")));
            }
            Err(e) => {
                if let Some(path) = &new_image {
                    self.discard_image(path).await;
                }
                return Err(e);
            }
        };

        let mut warnings = Vec::new();
        if new_image.is_some() && existing.has_image() && existing.theme != updated.theme {
            self.remove_image(&existing.theme, &mut warnings).await;
        }

        info!(
            event_id = id,
            user_id = updated.user_id,
            actor = ctx.user_id(),
            image_replaced = new_image.is_some(),
            "Event updated"
        );

        Ok(Outcome::with_warnings(updated, warnings))
    }

    /// Remove an event's image (best-effort) and then its row.
    pub async fn delete_by_id(&self, ctx: &RequestContext, id: i64) -> AppResult<Outcome<()>> {
        let existing = self.get_by_id(id).await?;

        let mut warnings = Vec::new();
        if existing.has_image() {
            self.remove_image(&existing.theme, &mut warnings).await;
        }

        if !self.events.delete_by_id(id).await? {
            return Err(AppError::not_found(format!("Event {id} not found")));
        }

        info!(event_id = id, actor = ctx.user_id(), "Event deleted");
        Ok(Outcome::with_warnings((), warnings))
    }

    /// Remove every event owned by any of `user_ids`, images first.
    ///
    /// Returns the number of rows removed.
    pub async fn delete_by_user_ids(
        &self,
        ctx: &RequestContext,
        user_ids: &[i64],
    ) -> AppResult<Outcome<u64>> {
        if user_ids.is_empty() {
            return Err(AppError::validation("At least one user id is required"));
        }

        let events = self.events.find_by_user_ids(user_ids).await?;

        let mut warnings = Vec::new();
        for event in events.iter().filter(|e| e.has_image()) {
            self.remove_image(&event.theme, &mut warnings).await;
        }

        let deleted = self.events.delete_by_user_ids(user_ids).await?;

        info!(
            user_ids = ?user_ids,
            deleted,
            actor = ctx.user_id(),
            "Events deleted by user"
        );
        Ok(Outcome::with_warnings(deleted, warnings))
    }

    async fn save_image(&self, image: ImageUpload) -> AppResult<String> {
        if image.data.is_empty() {
            return Err(AppError::validation("Image file must not be empty"));
        }

        let extension = extension_of(&image.file_name);
        self.images
            .save(image.data, &extension)
            .await
            .map_err(|e| e.into_kind(ErrorKind::ImageWrite))
    }

    async fn remove_image(&self, path: &str, warnings: &mut Vec<CleanupWarning>) {
        if let Err(e) = self.images.delete(path).await {
            warn!(image = path, error = %e, "Failed to remove event image");
            warnings.push(CleanupWarning::new(path, e.message));
        }
    }

    /// Remove an image written by an operation that then failed.
    async fn discard_image(&self, path: &str) {
        if let Err(e) = self.images.delete(path).await {
            warn!(image = path, error = %e, "Failed to remove orphaned image");
        }
    }
}
