//! Value objects representing immutable domain concepts.

pub mod login;
pub mod registration;
pub mod user_profile;

// Re-export commonly used types
pub use login::LoginOutcome;
pub use registration::NewUser;
pub use user_profile::UserProfile;
