//! In-memory implementation of SessionRepository

use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Session;
use crate::errors::DomainError;

use super::trait_::SessionRepository;

/// Process-local session store; every session is dropped on restart
#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl InMemorySessionRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert_if_absent(&self, session: Session) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;
        match sessions.entry(session.token_hash.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(session);
                Ok(true)
            }
        }
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(token_hash).cloned())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.len())
    }
}
