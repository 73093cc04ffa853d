//! Event lifecycle: rows and their images.

pub mod outcome;
pub mod service;

pub use outcome::{CleanupWarning, Outcome};
pub use service::{CreatedEvent, EventService, ImageUpload};
