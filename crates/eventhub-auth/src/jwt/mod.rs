//! JWT claims and decoding.

pub mod claims;
pub mod decoder;

pub use claims::{Claims, UserIdClaim};
pub use decoder::JwtDecoder;
