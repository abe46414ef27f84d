//! Session token service module
//!
//! Issues opaque session tokens and resolves them back to a user id.
//! Tokens are random alphanumeric strings; only their SHA-256 digest is stored.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::SessionServiceConfig;
pub use service::{hash_token, SessionService};
