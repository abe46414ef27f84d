//! Authentication service module
//!
//! This module provides the three public authentication operations:
//! - User registration with email uniqueness
//! - Credential login issuing a session token
//! - Session token validation

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
