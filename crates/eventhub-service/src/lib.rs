//! # eventhub-service
//!
//! Business logic for EventHub. The [`EventService`] keeps every event row
//! consistent with the image file it references.
//!
//! Services follow constructor injection: stores are provided at
//! construction time as `Arc<dyn ...>` trait objects.

pub mod context;
pub mod event;

pub use context::RequestContext;
pub use event::{CleanupWarning, CreatedEvent, EventService, ImageUpload, Outcome};
