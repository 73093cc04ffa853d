//! Core traits defined in `eventhub-core` and implemented by other crates.

pub mod storage;

pub use storage::ImageStore;
