//! # eventhub-storage
//!
//! The local filesystem [`ImageStore`](eventhub_core::traits::ImageStore)
//! holding event images, and the unique file naming it relies on.

pub mod local;
pub mod naming;

pub use local::LocalImageStore;
pub use naming::{extension_of, unique_file_name};
