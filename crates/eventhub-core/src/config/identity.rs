//! External identity service configuration.

use serde::{Deserialize, Serialize};

/// Where and how to resolve token subjects into user profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Base URL of the user service; profiles live under `/api/v1/user/id/{id}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Timeout for a single lookup, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u64 {
    10
}
