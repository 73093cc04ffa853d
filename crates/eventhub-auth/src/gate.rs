//! Per-request authentication.

use std::sync::Arc;

use tracing::debug;

use eventhub_core::config::{AuthConfig, IdentityConfig};
use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_entity::user::UserProfile;

use crate::identity::{HttpIdentityResolver, IdentityResolver};
use crate::jwt::JwtDecoder;

/// Turns an `Authorization` header into the user it belongs to.
///
/// The header must be exactly `Bearer <token>`; the token must carry a valid
/// HMAC signature, be unexpired and name a `user_id` the identity service
/// knows. Any failure along the way is `Unauthorized`, except an identity
/// reply that cannot be decoded.
#[derive(Debug, Clone)]
pub struct Authenticator {
    decoder: JwtDecoder,
    resolver: Arc<dyn IdentityResolver>,
}

impl Authenticator {
    /// Creates an authenticator from its parts.
    pub fn new(decoder: JwtDecoder, resolver: Arc<dyn IdentityResolver>) -> Self {
        Self { decoder, resolver }
    }

    /// Creates an authenticator resolving users over HTTP.
    pub fn from_config(auth: &AuthConfig, identity: &IdentityConfig) -> AppResult<Self> {
        Ok(Self::new(
            JwtDecoder::new(auth),
            Arc::new(HttpIdentityResolver::new(identity)?),
        ))
    }

    /// Authenticate a request from its raw `Authorization` header value.
    pub async fn authenticate(&self, header: Option<&str>) -> AppResult<UserProfile> {
        let token = bearer_token(header)?;
        let claims = self.decoder.decode(token)?;
        let user_id = claims
            .user_id()
            .ok_or_else(|| AppError::unauthorized("User ID not found in token claims"))?;

        let user = self.resolver.resolve(&user_id).await?;
        debug!(user_id = user.id, "Authenticated request");
        Ok(user)
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(header: Option<&str>) -> AppResult<&str> {
    let header = header
        .filter(|h| !h.is_empty())
        .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(AppError::unauthorized(
            "Authorization header format must be 'Bearer <token>'",
        )),
    }
}
