//! Registration input validation and bcrypt secret handling

use bands_shared::config::auth::{MAX_HASH_COST, MIN_HASH_COST};
use bands_shared::validation::validators;
use bands_shared::PasswordPolicy;

use crate::domain::value_objects::NewUser;
use crate::errors::{DomainError, DomainResult, ValidationError};

/// Plaintext behind the dummy hash used for unknown-email logins
const DUMMY_SECRET: &str = "bands-dummy-secret";

/// Fixed salt for the dummy hash; it never guards a real account
const DUMMY_SALT: [u8; 16] = *b"bands-dummy-salt";

/// Validates registration input and checks login secrets
///
/// All methods are synchronous; bcrypt work is CPU bound, so async callers
/// should run [`hash_secret`](Self::hash_secret) and
/// [`verify_secret`](Self::verify_secret) on a blocking thread.
pub struct CredentialVerifier {
    policy: PasswordPolicy,
    dummy_hash: String,
}

impl CredentialVerifier {
    /// Build a verifier for `policy`
    ///
    /// The hash cost is clamped to what bcrypt accepts, and the dummy hash is
    /// computed here at that cost so every unknown-email login pays exactly
    /// one verification.
    pub fn new(mut policy: PasswordPolicy) -> Self {
        policy.hash_cost = policy.hash_cost.clamp(MIN_HASH_COST, MAX_HASH_COST);

        let dummy_hash = match bcrypt::hash_with_salt(DUMMY_SECRET, policy.hash_cost, DUMMY_SALT) {
            Ok(parts) => parts.format_for_version(bcrypt::Version::TwoB),
            Err(e) => {
                tracing::error!(error = %e, "Failed to build dummy password hash");
                String::new()
            }
        };

        Self { policy, dummy_hash }
    }

    /// Active policy
    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Reject structurally invalid registration input
    ///
    /// Fields are checked in order name, email, password; the first failure
    /// is returned.
    pub fn validate_for_registration(&self, candidate: &NewUser) -> Result<(), ValidationError> {
        self.validate_name(&candidate.name)?;
        self.validate_email(&candidate.email)?;
        self.validate_password(&candidate.password)
    }

    fn validate_name(&self, name: &str) -> Result<(), ValidationError> {
        if !validators::not_empty(name) {
            return Err(required("name"));
        }
        let max = self.policy.max_name_length;
        if !validators::length_between(name, 1, max) {
            return Err(ValidationError::InvalidLength {
                field: "name".to_string(),
                min: 1,
                max,
                actual: name.chars().count(),
            });
        }
        Ok(())
    }

    fn validate_email(&self, email: &str) -> Result<(), ValidationError> {
        if !validators::not_empty(email) {
            return Err(required("email"));
        }
        let max = self.policy.max_email_length;
        if !validators::length_between(email, 3, max) {
            return Err(ValidationError::InvalidLength {
                field: "email".to_string(),
                min: 3,
                max,
                actual: email.chars().count(),
            });
        }
        if !validators::is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    fn validate_password(&self, password: &str) -> Result<(), ValidationError> {
        if password.is_empty() {
            return Err(required("password"));
        }

        let min = self.policy.min_password_length;
        let max = self.policy.max_password_length;
        let chars = password.chars().count();
        if chars < min {
            return Err(ValidationError::InvalidLength {
                field: "password".to_string(),
                min,
                max,
                actual: chars,
            });
        }
        // bcrypt truncates past 72 bytes, so the upper bound is in bytes
        if password.len() > max {
            return Err(ValidationError::InvalidLength {
                field: "password".to_string(),
                min,
                max,
                actual: password.len(),
            });
        }
        Ok(())
    }

    /// Derive the stored secret from a plaintext password
    pub fn hash_secret(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.policy.hash_cost)
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    /// Compare a login attempt with a stored bcrypt hash
    ///
    /// A malformed stored hash counts as a mismatch.
    pub fn verify_secret(&self, stored: &str, attempt: &str) -> bool {
        bcrypt::verify(attempt, stored).unwrap_or(false)
    }

    /// Burn one verification against a fixed hash
    ///
    /// Used when the email is unknown so the response time matches a
    /// wrong-password attempt. Always returns `false`.
    pub fn verify_against_dummy(&self, attempt: &str) -> bool {
        let _ = bcrypt::verify(attempt, &self.dummy_hash);
        false
    }

    #[cfg(test)]
    pub(crate) fn dummy_hash(&self) -> &str {
        &self.dummy_hash
    }
}

fn required(field: &str) -> ValidationError {
    ValidationError::RequiredField {
        field: field.to_string(),
    }
}
