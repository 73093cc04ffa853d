//! Convenience result type alias for EventHub.

use crate::error::AppError;

/// A specialized `Result` type for EventHub operations.
pub type AppResult<T> = Result<T, AppError>;
