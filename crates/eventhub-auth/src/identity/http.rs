//! Identity resolution over HTTP against the user service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use eventhub_core::config::IdentityConfig;
use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;
use eventhub_entity::user::UserProfile;

use super::IdentityResolver;

/// Resolves users with `GET {base_url}/api/v1/user/id/{id}`.
#[derive(Debug, Clone)]
pub struct HttpIdentityResolver {
    client: Client,
    base_url: String,
}

impl HttpIdentityResolver {
    /// Build a resolver with the configured base URL and timeout.
    pub fn new(config: &IdentityConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build identity service client",
                    e,
                )
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn profile_url(&self, user_id: &str) -> String {
        format!("{}/api/v1/user/id/{}", self.base_url, user_id)
    }
}

/// User ids are interpolated into a URL path, so only plain tokens pass.
fn is_safe_user_id(user_id: &str) -> bool {
    !user_id.is_empty()
        && user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[async_trait]
impl IdentityResolver for HttpIdentityResolver {
    async fn resolve(&self, user_id: &str) -> AppResult<UserProfile> {
        if !is_safe_user_id(user_id) {
            return Err(AppError::unauthorized("Invalid user id in token claims"));
        }

        let url = self.profile_url(user_id);
        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(user_id, error = %e, "Identity service request failed");
            AppError::with_source(
                ErrorKind::Unauthorized,
                "User not found in authentication service",
                e,
            )
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(user_id, status = %status, "Identity service rejected user");
            return Err(AppError::unauthorized(
                "User not found in authentication service",
            ));
        }

        response.json::<UserProfile>().await.map_err(|e| {
            AppError::with_source(ErrorKind::ExternalService, "Failed to parse user data", e)
        })
    }
}
