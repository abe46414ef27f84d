//! Business services containing domain logic and use cases.

pub mod auth;
pub mod credential;
pub mod session;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use credential::CredentialVerifier;
pub use session::{SessionService, SessionServiceConfig};
