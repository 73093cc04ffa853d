//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use eventhub_entity::user::UserProfile;

/// Context for the current authenticated request.
///
/// Built by the authentication middleware and passed into service methods so
/// that every mutation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The resolved user.
    pub user: UserProfile,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user: UserProfile) -> Self {
        Self {
            user,
            request_time: Utc::now(),
        }
    }

    /// The acting user's id.
    pub fn user_id(&self) -> i64 {
        self.user.id
    }
}
