//! Credential verification module
//!
//! Registration input checks and password hashing/verification.

mod verifier;

#[cfg(test)]
mod tests;

pub use verifier::CredentialVerifier;
