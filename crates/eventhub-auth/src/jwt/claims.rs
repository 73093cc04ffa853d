//! Claims carried by tokens from the identity service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// JWT claims payload this service relies on.
///
/// Tokens are issued elsewhere; only `user_id` is read, `exp` is checked by
/// the decoder when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identifier of the user the token was issued to.
    #[serde(default)]
    pub user_id: Option<UserIdClaim>,
    /// Expiration timestamp (seconds since epoch).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Issued-at timestamp (seconds since epoch).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

/// A `user_id` claim, which issuers encode either as a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserIdClaim {
    /// Numeric id.
    Number(i64),
    /// String id.
    Text(String),
}

impl fmt::Display for UserIdClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl Claims {
    /// The user id as it should be looked up, if present and non-blank.
    pub fn user_id(&self) -> Option<String> {
        self.user_id
            .as_ref()
            .map(ToString::to_string)
            .filter(|id| !id.trim().is_empty())
    }
}
