//! # Bands Core
//!
//! Core business logic and domain layer for the Bands backend.
//! This crate contains domain entities, the authentication and session
//! services, repository interfaces, and the error types callers branch on.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::{LoginOutcome, NewUser, Session, User, UserProfile};
pub use errors::{
    AuthError, DomainError, DomainResult, ErrorKind, TokenError, ValidationError,
};
pub use repositories::{
    InMemorySessionRepository, InMemoryUserRepository, SessionRepository, UserRepository,
};
pub use services::{
    AuthService, AuthServiceConfig, CredentialVerifier, SessionService, SessionServiceConfig,
};
