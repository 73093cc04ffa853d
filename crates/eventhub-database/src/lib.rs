//! # eventhub-database
//!
//! PostgreSQL connection management, migrations, the [`EventStore`]
//! persistence trait and its implementations.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use repositories::{InMemoryEventStore, PgEventStore};
pub use store::EventStore;
