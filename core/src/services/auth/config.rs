//! Configuration for the authentication service

use bands_shared::{AuthConfig, PasswordPolicy};

use crate::services::session::SessionServiceConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone, Default)]
pub struct AuthServiceConfig {
    /// Registration rules and bcrypt cost
    pub password: PasswordPolicy,
    /// Token length and lifetime
    pub session: SessionServiceConfig,
}

impl AuthServiceConfig {
    /// Cheapest hash cost, for tests
    pub fn for_tests() -> Self {
        Self {
            password: PasswordPolicy::for_tests(),
            session: SessionServiceConfig::default(),
        }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            password: config.password.clone(),
            session: SessionServiceConfig::from(&config.session),
        }
    }
}
