//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Bearer token validation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared HMAC secret the identity service signs tokens with.
    pub jwt_secret: String,
}
