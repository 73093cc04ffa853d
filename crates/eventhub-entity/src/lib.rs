//! # eventhub-entity
//!
//! Domain entity models for EventHub. [`event::Event`] is the only persisted
//! table row; [`user::UserProfile`] is the identity handed back by the
//! external user service.

pub mod event;
pub mod user;

pub use event::{Event, EventData, EventFields};
pub use user::UserProfile;
