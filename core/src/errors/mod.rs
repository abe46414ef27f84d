//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthError, TokenError, ValidationError};

use bands_shared::error_codes;
use thiserror::Error;

/// Classification of a [`DomainError`], used by callers to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input failed structural or business validation
    InvalidData,
    /// Credentials or token did not resolve to a valid identity
    Unauthorized,
    /// Registration email collides with an existing user
    EmailAlreadyTaken,
    /// Unexpected infrastructure failure
    Internal,
}

impl ErrorKind {
    /// Stable machine-readable code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidData => error_codes::INVALID_DATA,
            ErrorKind::Unauthorized => error_codes::UNAUTHORIZED,
            ErrorKind::EmailAlreadyTaken => error_codes::EMAIL_ALREADY_TAKEN,
            ErrorKind::Internal => error_codes::INTERNAL_ERROR,
        }
    }
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    /// Storage, hashing or runtime failure; never a validation outcome
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Build an internal error from any displayable cause
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation(_) => ErrorKind::InvalidData,
            DomainError::Auth(AuthError::InvalidCredentials) => ErrorKind::Unauthorized,
            DomainError::Auth(AuthError::EmailAlreadyTaken { .. }) => ErrorKind::EmailAlreadyTaken,
            DomainError::Token(_) => ErrorKind::Unauthorized,
            DomainError::Internal { .. } => ErrorKind::Internal,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind() == ErrorKind::Unauthorized
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
