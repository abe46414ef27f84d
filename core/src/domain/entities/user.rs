//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

use crate::domain::value_objects::UserProfile;

/// User entity representing a registered user
///
/// Deliberately not `Serialize`: the password hash must never reach a response.
/// Use [`User::profile`] for anything leaving the service.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier, assigned at registration and never changed
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Login key, unique across all users (case-sensitive)
    pub email: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    /// Timestamp when the user registered
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User with a freshly generated id
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Public view of the user (id, name, email)
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_creation() {
        let user = User::new(
            "Paolo".to_string(),
            "paolo@paolo.com".to_string(),
            "$2b$04$hash".to_string(),
        );

        assert!(!user.id.is_nil());
        assert_eq!(user.name, "Paolo");
        assert_eq!(user.email, "paolo@paolo.com");
        assert_eq!(user.password_hash, "$2b$04$hash");
    }

    #[test]
    fn test_new_users_get_distinct_ids() {
        let a = User::new("A".into(), "a@a.com".into(), "h".into());
        let b = User::new("B".into(), "b@b.com".into(), "h".into());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_profile_omits_secret() {
        let user = User::new(
            "Paolo".to_string(),
            "paolo@paolo.com".to_string(),
            "$2b$04$secret-hash".to_string(),
        );

        let profile = user.profile();
        assert_eq!(profile.id, user.id);
        assert_eq!(profile.name, "Paolo");
        assert_eq!(profile.email, "paolo@paolo.com");

        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_debug_redacts_password_hash() {
        let user = User::new("Paolo".into(), "paolo@paolo.com".into(), "$2b$04$xyz".into());
        let debug = format!("{:?}", user);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("$2b$04$xyz"));
    }
}
