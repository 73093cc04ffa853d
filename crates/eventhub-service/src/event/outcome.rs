//! Results of operations with best-effort side effects.

use serde::Serialize;

/// A best-effort step that failed without failing the operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanupWarning {
    /// Image path the step was working on.
    pub path: String,
    /// What went wrong.
    pub message: String,
}

impl CleanupWarning {
    /// Creates a warning for `path`.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A successful result plus the warnings of its best-effort steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    /// The operation's result.
    pub value: T,
    /// Non-fatal cleanup failures, in the order they happened.
    pub warnings: Vec<CleanupWarning>,
}

impl<T> Outcome<T> {
    /// An outcome without warnings.
    pub fn new(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// An outcome carrying `warnings`.
    pub fn with_warnings(value: T, warnings: Vec<CleanupWarning>) -> Self {
        Self { value, warnings }
    }

    /// Whether any best-effort step failed.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Drop the warnings and keep the value.
    pub fn into_value(self) -> T {
        self.value
    }
}
