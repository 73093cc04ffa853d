//! User identity value objects.

pub mod profile;

pub use profile::UserProfile;
