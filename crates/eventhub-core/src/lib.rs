//! # eventhub-core
//!
//! Core crate for EventHub. Contains the unified error system, the
//! configuration schemas, and the capability traits implemented by the
//! storage crate.
//!
//! This crate has **no** internal dependencies on other EventHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
