//! Domain-specific error types for registration, login and session tokens
//!
//! The variants describe what went wrong; the transport layer decides how each
//! failure is presented by switching on [`super::ErrorKind`].

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password; the two cases are never distinguished
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already taken: {email}")]
    EmailAlreadyTaken { email: String },
}

/// Session token errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Missing session token")]
    MissingToken,

    #[error("Invalid session token")]
    InvalidToken,

    #[error("Session token expired")]
    TokenExpired,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid length: {field} (min: {min}, max: {max}, actual: {actual})")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Malformed request: {reason}")]
    MalformedRequest { reason: String },
}

impl ValidationError {
    /// Name of the offending field, when the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::RequiredField { field } => Some(field),
            ValidationError::InvalidLength { field, .. } => Some(field),
            ValidationError::InvalidEmail => Some("email"),
            ValidationError::MalformedRequest { .. } => None,
        }
    }
}
