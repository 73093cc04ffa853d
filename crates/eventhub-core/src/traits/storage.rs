//! Image store trait for pluggable event image backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for the file area holding event images.
///
/// Paths handed out by [`ImageStore::save`] are relative (`theme/<uuid>.png`)
/// and are what gets persisted as an event's theme. Implementations resolve
/// only the file name of any path they are given, so a stale or foreign
/// directory component can never escape the storage area.
#[async_trait]
pub trait ImageStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g. `"local"`).
    fn provider_type(&self) -> &str;

    /// Write `data` under a fresh unique name keeping `extension`
    /// (including its leading dot, or empty) and return the relative path.
    async fn save(&self, data: Bytes, extension: &str) -> AppResult<String>;

    /// Remove the file behind `path`. A missing file is not an error.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Check whether the file behind `path` exists.
    async fn exists(&self, path: &str) -> AppResult<bool>;
}
