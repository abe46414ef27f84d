//! Session entity binding an issued token to a user.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Session record as stored by a session repository
///
/// Only the SHA-256 digest of the token is kept; the token itself is handed to
/// the client once and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Hex-encoded SHA-256 of the token
    pub token_hash: String,

    /// User the token belongs to
    pub user_id: Uuid,

    /// When the session was issued
    pub issued_at: DateTime<Utc>,

    /// When the session stops resolving; `None` means it never expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates a new session, optionally time-boxed by `ttl`
    ///
    /// An expiry past the representable range saturates at its bound.
    pub fn new(token_hash: String, user_id: Uuid, ttl: Option<Duration>) -> Self {
        let issued_at = Utc::now();
        Self {
            token_hash,
            user_id,
            issued_at,
            expires_at: ttl.map(|ttl| {
                issued_at.checked_add_signed(ttl).unwrap_or(if ttl < Duration::zero() {
                    DateTime::<Utc>::MIN_UTC
                } else {
                    DateTime::<Utc>::MAX_UTC
                })
            }),
        }
    }

    /// Checks if the session has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Checks expiry against an explicit instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(false, |expires_at| now >= expires_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_without_ttl_never_expires() {
        let session = Session::new("abc".to_string(), Uuid::new_v4(), None);
        assert!(session.expires_at.is_none());
        assert!(!session.is_expired());
        assert!(!session.is_expired_at(Utc::now() + Duration::days(3650)));
    }

    #[test]
    fn test_session_with_ttl() {
        let session = Session::new("abc".to_string(), Uuid::new_v4(), Some(Duration::minutes(30)));
        let expires_at = session.expires_at.unwrap();
        assert_eq!(expires_at - session.issued_at, Duration::minutes(30));
        assert!(!session.is_expired());
        assert!(session.is_expired_at(expires_at));
        assert!(session.is_expired_at(expires_at + Duration::seconds(1)));
    }

    #[test]
    fn test_session_with_overflowing_ttl_saturates() {
        let session = Session::new(
            "abc".to_string(),
            Uuid::new_v4(),
            Some(Duration::seconds(10_000_000_000_000)),
        );
        assert_eq!(session.expires_at, Some(DateTime::<Utc>::MAX_UTC));
        assert!(!session.is_expired());

        let session = Session::new("abc".to_string(), Uuid::new_v4(), Some(Duration::milliseconds(i64::MAX)));
        assert_eq!(session.expires_at, Some(DateTime::<Utc>::MAX_UTC));
    }
}
