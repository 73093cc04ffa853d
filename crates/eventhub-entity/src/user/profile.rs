//! Profile returned by the external user service.

use serde::{Deserialize, Serialize};

/// A user as described by the identity service.
///
/// Only `id` is required; the remaining fields are carried through for
/// handlers that want to echo who is acting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier in the identity service.
    pub id: i64,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// First name.
    #[serde(default)]
    pub firstname: Option<String>,
    /// Last name.
    #[serde(default)]
    pub lastname: Option<String>,
    /// State / region.
    #[serde(default)]
    pub state: Option<String>,
    /// Mobile number.
    #[serde(default)]
    pub mobile: Option<String>,
    /// Username, if the identity service has one.
    #[serde(default)]
    pub username: Option<String>,
    /// Whether the account has been verified.
    #[serde(default)]
    pub enabled: bool,
}
