//! # eventhub-auth
//!
//! Authentication for EventHub requests.
//!
//! ## Modules
//!
//! - `jwt`: bearer token claims and HMAC signature validation
//! - `identity`: resolving a token's user id into a [`UserProfile`](eventhub_entity::UserProfile)
//! - `gate`: the per-request [`Authenticator`] tying both together

pub mod gate;
pub mod identity;
pub mod jwt;

pub use gate::{Authenticator, bearer_token};
pub use identity::{HttpIdentityResolver, IdentityResolver};
pub use jwt::{Claims, JwtDecoder, UserIdClaim};
