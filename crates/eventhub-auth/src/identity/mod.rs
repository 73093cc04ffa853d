//! Resolution of token subjects into user profiles.

pub mod http;

use async_trait::async_trait;

use eventhub_core::result::AppResult;
use eventhub_entity::user::UserProfile;

pub use http::HttpIdentityResolver;

/// Looks up the user behind a validated token.
///
/// An unknown user or an unreachable service is
/// [`ErrorKind::Unauthorized`](eventhub_core::error::ErrorKind::Unauthorized);
/// a reply that cannot be understood is a server-side error.
#[async_trait]
pub trait IdentityResolver: Send + Sync + std::fmt::Debug + 'static {
    /// Resolve `user_id` (as carried by the token) into a profile.
    async fn resolve(&self, user_id: &str) -> AppResult<UserProfile>;
}
