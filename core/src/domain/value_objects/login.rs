//! Result of a successful login.

use std::fmt;

use crate::domain::entities::User;

/// Authenticated user together with the freshly issued session token
#[derive(Clone)]
pub struct LoginOutcome {
    pub user: User,
    pub token: String,
}

impl fmt::Debug for LoginOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginOutcome")
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}
