//! Event store implementations.

pub mod event;
pub mod memory;

pub use event::PgEventStore;
pub use memory::InMemoryEventStore;
