//! User route handlers
//!
//! - `POST /api/user` registration
//! - `POST /api/user/login` login
//! - `GET /api/user/me` session token validation

pub mod login;
pub mod me;
pub mod register;

use std::sync::Arc;

use bands_core::repositories::{SessionRepository, UserRepository};
use bands_core::services::auth::AuthService;

/// Application state that holds shared services
pub struct AppState<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub auth_service: Arc<AuthService<U, S>>,
}

impl<U, S> AppState<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(auth_service: Arc<AuthService<U, S>>) -> Self {
        Self { auth_service }
    }
}
