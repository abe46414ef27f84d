//! Session service implementation

use std::sync::Arc;

use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::entities::Session;
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::SessionRepository;

use super::config::SessionServiceConfig;

/// Issues and resolves opaque session tokens
pub struct SessionService<R: SessionRepository> {
    repository: Arc<R>,
    config: SessionServiceConfig,
}

impl<R: SessionRepository> SessionService<R> {
    pub fn new(repository: Arc<R>, config: SessionServiceConfig) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> &SessionServiceConfig {
        &self.config
    }

    /// Issue a new token bound to `user_id`
    ///
    /// The returned token is the only copy; the store keeps its digest.
    /// A digest collision with an existing session is retried with a fresh
    /// token and reported as an internal error once attempts run out.
    pub async fn issue(&self, user_id: Uuid) -> DomainResult<String> {
        for attempt in 1..=self.config.max_issue_attempts {
            let token = generate_token(self.config.token_length);
            let session = Session::new(hash_token(&token), user_id, self.config.ttl);

            if self.repository.insert_if_absent(session).await? {
                tracing::debug!(user_id = %user_id, "Session issued");
                return Ok(token);
            }

            tracing::warn!(
                user_id = %user_id,
                attempt = attempt,
                "Session token collision, regenerating"
            );
        }

        Err(DomainError::internal("Failed to issue a unique session token"))
    }

    /// Resolve a token to the user it was issued for
    ///
    /// # Errors
    /// * `TokenError::MissingToken` - Empty token
    /// * `TokenError::InvalidToken` - No session for this exact token
    /// * `TokenError::TokenExpired` - Session exists but its TTL has elapsed
    pub async fn resolve(&self, token: &str) -> DomainResult<Uuid> {
        if token.is_empty() {
            return Err(TokenError::MissingToken.into());
        }

        let session = self
            .repository
            .find_by_token_hash(&hash_token(token))
            .await?
            .ok_or(TokenError::InvalidToken)?;

        if session.is_expired() {
            tracing::debug!(user_id = %session.user_id, "Rejected expired session");
            return Err(TokenError::TokenExpired.into());
        }

        Ok(session.user_id)
    }
}

/// Hex-encoded SHA-256 digest of a token
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

fn generate_token(length: usize) -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
