//! Session repository trait for token-to-user bindings.

use async_trait::async_trait;

use crate::domain::entities::Session;
use crate::errors::DomainError;

/// Repository trait for Session persistence operations
///
/// Sessions are keyed by the digest of their token. Implementations must make
/// a newly inserted session visible to readers atomically: a lookup sees either
/// the whole record or nothing.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Store a session unless one with the same token hash already exists
    ///
    /// # Returns
    /// * `Ok(true)` - Session stored
    /// * `Ok(false)` - Token hash already bound; nothing was written
    /// * `Err(DomainError)` - Storage failure
    async fn insert_if_absent(&self, session: Session) -> Result<bool, DomainError>;

    /// Find a session by the exact token hash
    ///
    /// # Returns
    /// * `Ok(Some(Session))` - Binding found (expiry is not checked here)
    /// * `Ok(None)` - No binding for that hash
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, DomainError>;

    /// Count stored sessions
    async fn count(&self) -> Result<usize, DomainError>;
}
