//! Request DTOs with validation.

use axum::extract::Multipart;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_entity::event::EventFields;
use eventhub_service::event::ImageUpload;

/// Width of the `category` column.
pub const MAX_CATEGORY_CHARS: usize = 100;

/// Multipart form submitted on event create and update.
///
/// Text fields are kept raw until [`EventForm::into_parts`] so that parse
/// errors name the offending field.
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    /// Owning user id, as sent.
    pub user_id: Option<String>,
    /// Title.
    pub title: String,
    /// Category.
    pub category: String,
    /// Description.
    pub description: String,
    /// Start time as `YYYY-MM-DDTHH:MM`.
    pub start_time: Option<String>,
    /// End time as `YYYY-MM-DDTHH:MM`.
    pub end_time: Option<String>,
    /// Uploaded `image` file part, if any.
    pub image: Option<ImageUpload>,
}

impl EventForm {
    /// Read every part of a multipart body. Unknown parts are ignored.
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            AppError::validation("Invalid multipart body").with_details(e.body_text())
        })? {
            let name = field.name().unwrap_or("").to_string();

            if name == "image" {
                let Some(file_name) = field
                    .file_name()
                    .filter(|name| !name.is_empty())
                    .map(String::from)
                else {
                    continue;
                };
                let data = field.bytes().await.map_err(|e| {
                    AppError::validation("Failed to read image").with_details(e.body_text())
                })?;
                form.image = Some(ImageUpload::new(file_name, data));
                continue;
            }

            let text = field.text().await.map_err(|e| {
                AppError::validation(format!("Failed to read field {name}"))
                    .with_details(e.body_text())
            })?;
            match name.as_str() {
                "user_id" => form.user_id = Some(text),
                "title" => form.title = text,
                "category" => form.category = text,
                "description" => form.description = text,
                "start_time" => form.start_time = Some(text),
                "end_time" => form.end_time = Some(text),
                _ => {}
            }
        }

        Ok(form)
    }

    /// Parse the text fields and split off the image.
    pub fn into_parts(self) -> AppResult<(EventFields, Option<ImageUpload>)> {
        let user_id = parse_user_id(self.user_id.as_deref().unwrap_or(""))?;
        let start_time =
            parse_form_timestamp(self.start_time.as_deref().unwrap_or(""), "start_time")?;
        let end_time = parse_form_timestamp(self.end_time.as_deref().unwrap_or(""), "end_time")?;

        if self.category.chars().count() > MAX_CATEGORY_CHARS {
            return Err(AppError::validation("Invalid category")
                .with_details(format!("at most {MAX_CATEGORY_CHARS} characters")));
        }

        let fields = EventFields {
            user_id,
            title: self.title,
            category: self.category,
            description: self.description,
            start_time,
            end_time,
        };
        Ok((fields, self.image))
    }
}

/// Parse a `user_id` form value: a non-negative integer.
pub fn parse_user_id(raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .and_then(|id| i64::try_from(id).ok())
        .ok_or_else(|| AppError::validation("Invalid user_id"))
}

/// Parse a form timestamp `YYYY-MM-DDTHH:MM` as UTC.
///
/// Seconds and the `Z` designator are appended before RFC 3339 parsing, so
/// any other shape is rejected.
pub fn parse_form_timestamp(raw: &str, field: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&format!("{raw}:00Z"))
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            AppError::validation(format!("Invalid {field} format")).with_details(e.to_string())
        })
}

/// Body of `DELETE /api/v1/event/user`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DeleteByUsersRequest {
    /// Owners whose events are removed.
    #[validate(length(min = 1, message = "At least one user id is required"))]
    pub ids: Vec<u64>,
}

impl DeleteByUsersRequest {
    /// Validate the body and return the ids as stored.
    pub fn user_ids(&self) -> AppResult<Vec<i64>> {
        self.validate().map_err(|e| {
            AppError::validation("Invalid request payload").with_details(e.to_string())
        })?;

        self.ids
            .iter()
            .map(|&id| {
                i64::try_from(id).map_err(|_| {
                    AppError::validation("Invalid request payload")
                        .with_details(format!("user id {id} is out of range"))
                })
            })
            .collect()
    }
}
