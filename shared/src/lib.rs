//! Shared utilities and common types for the Bands server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Validation helpers

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, Environment, LoggingConfig, PasswordPolicy, ServerConfig,
    SessionConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use utils::validation;
