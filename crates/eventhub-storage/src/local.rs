//! Local filesystem image store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;
use eventhub_core::traits::ImageStore;

use crate::naming::unique_file_name;

/// Image store writing flat files into one directory.
///
/// Saved files are addressed as `<prefix>/<file name>`, where the prefix is
/// the last component of the configured directory (`theme` by default).
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    /// Directory holding every image.
    root: PathBuf,
    /// Directory component of the relative paths handed out.
    prefix: String,
}

impl LocalImageStore {
    /// Create an image store rooted at `image_dir`, creating it if needed.
    pub async fn new(image_dir: &str) -> AppResult<Self> {
        if image_dir.trim().is_empty() {
            return Err(AppError::configuration("Image directory must not be empty"));
        }
        let root = PathBuf::from(image_dir);
        create_root(&root).await?;

        let prefix = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| image_dir.trim_matches('/').to_string());

        Ok(Self { root, prefix })
    }

    /// Directory the images live in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a relative path to a file inside the root, using only its file
    /// name. Returns `None` for paths without one (`""`, `".."`).
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        Path::new(path).file_name().map(|name| self.root.join(name))
    }
}

async fn create_root(root: &Path) -> AppResult<()> {
    fs::create_dir_all(root).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::ImageWrite,
            format!("Failed to create image directory: {}", root.display()),
            e,
        )
    })
}

#[async_trait]
impl ImageStore for LocalImageStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn save(&self, data: Bytes, extension: &str) -> AppResult<String> {
        create_root(&self.root).await?;

        let file_name = unique_file_name(extension);
        let full_path = self.root.join(&file_name);
        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(ErrorKind::ImageWrite, "Failed to save image", e)
        })?;

        let path = format!("{}/{}", self.prefix, file_name);
        debug!(path = %path, bytes = data.len(), "Saved image");
        Ok(path)
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        let Some(full_path) = self.resolve(path) else {
            return Ok(());
        };
        match fs::remove_file(&full_path).await {
            Ok(()) => {
                debug!(path, "Deleted image");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete image: {path}"),
                e,
            )),
        }
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        let Some(full_path) = self.resolve(path) else {
            return Ok(false);
        };
        fs::try_exists(&full_path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to inspect image: {path}"),
                e,
            )
        })
    }
}
