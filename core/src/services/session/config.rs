//! Configuration for the session service

use bands_shared::config::auth::{MAX_SESSION_TTL_SECONDS, MAX_TOKEN_LENGTH, MIN_TOKEN_LENGTH};
use bands_shared::SessionConfig;
use chrono::Duration;

/// Configuration for the session service
#[derive(Debug, Clone)]
pub struct SessionServiceConfig {
    /// Token length in characters
    pub token_length: usize,
    /// Session lifetime; `None` means sessions never expire
    pub ttl: Option<Duration>,
    /// Attempts at issuing a fresh token before giving up
    pub max_issue_attempts: u32,
}

impl Default for SessionServiceConfig {
    fn default() -> Self {
        Self::from(&SessionConfig::default())
    }
}

impl From<&SessionConfig> for SessionServiceConfig {
    /// Token length is kept within `MIN_TOKEN_LENGTH..=MAX_TOKEN_LENGTH` and
    /// the lifetime capped at `MAX_SESSION_TTL_SECONDS`.
    fn from(config: &SessionConfig) -> Self {
        Self {
            token_length: config.token_length.clamp(MIN_TOKEN_LENGTH, MAX_TOKEN_LENGTH),
            ttl: config
                .ttl_seconds
                .map(|seconds| seconds.min(MAX_SESSION_TTL_SECONDS))
                .and_then(Duration::try_seconds),
            max_issue_attempts: 3,
        }
    }
}
