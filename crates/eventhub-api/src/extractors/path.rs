//! Typed path parameter helpers.

use eventhub_core::error::AppError;

/// Parses a non-negative integer id from a path segment.
pub fn parse_id(raw: &str, name: &str) -> Result<i64, AppError> {
    raw.parse::<u64>()
        .ok()
        .and_then(|id| i64::try_from(id).ok())
        .ok_or_else(|| {
            AppError::validation(format!("Invalid {name}"))
                .with_details(format!("'{raw}' is not a valid id"))
        })
}
