//! Image storage configuration.

use serde::{Deserialize, Serialize};

/// Local image storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding event images. Its last component prefixes stored
    /// theme paths (`theme/<uuid>.png`).
    #[serde(default = "default_image_dir")]
    pub image_dir: String,
    /// Maximum request body size in bytes (default 10 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            image_dir: default_image_dir(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_image_dir() -> String {
    "theme".to_string()
}

fn default_max_upload() -> u64 {
    10_485_760 // 10 MB
}
