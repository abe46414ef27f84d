//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::value_objects::{LoginOutcome, NewUser, UserProfile};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{SessionRepository, UserRepository};
use crate::services::credential::CredentialVerifier;
use crate::services::session::SessionService;

use super::config::AuthServiceConfig;

/// Authentication service coordinating users, credentials and sessions
///
/// Cheap to share behind an `Arc`; every operation takes `&self` and may run
/// concurrently with any other.
pub struct AuthService<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    /// User repository for account storage
    user_repository: Arc<U>,
    /// Session service for token issuance and lookup
    session_service: Arc<SessionService<S>>,
    /// Input validation and password hashing
    credential_verifier: Arc<CredentialVerifier>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, S> AuthService<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `session_repository` - Repository for token bindings
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        session_repository: Arc<S>,
        config: AuthServiceConfig,
    ) -> Self {
        let session_service = Arc::new(SessionService::new(
            session_repository,
            config.session.clone(),
        ));
        let credential_verifier = Arc::new(CredentialVerifier::new(config.password.clone()));

        Self {
            user_repository,
            session_service,
            credential_verifier,
            config,
        }
    }

    pub fn config(&self) -> &AuthServiceConfig {
        &self.config
    }

    /// Register a new user
    ///
    /// This method:
    /// 1. Validates name, email and password
    /// 2. Rejects an email that is already registered
    /// 3. Hashes the password and stores the user
    ///
    /// The repository's atomic insert is what guarantees uniqueness; the
    /// early lookup only avoids hashing for an obvious duplicate.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The stored user with its assigned id
    /// * `Err(DomainError)` - Validation failure, duplicate email, or storage failure
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bands_core::domain::value_objects::NewUser;
    /// use bands_core::repositories::{InMemorySessionRepository, InMemoryUserRepository};
    /// use bands_core::services::AuthService;
    ///
    /// async fn register(auth_service: &AuthService<InMemoryUserRepository, InMemorySessionRepository>) {
    ///     let candidate = NewUser::new("Paolo", "paolo@paolo.com", "123456");
    ///     match auth_service.register(candidate).await {
    ///         Ok(user) => println!("Registered {}", user.id),
    ///         Err(e) => eprintln!("Registration failed: {}", e),
    ///     }
    /// }
    /// ```
    pub async fn register(&self, candidate: NewUser) -> DomainResult<User> {
        self.credential_verifier.validate_for_registration(&candidate)?;

        if self.user_repository.exists_by_email(&candidate.email).await? {
            tracing::info!(email = %candidate.email, "Registration rejected: email already taken");
            return Err(AuthError::EmailAlreadyTaken {
                email: candidate.email,
            }
            .into());
        }

        let NewUser {
            name,
            email,
            password,
        } = candidate;

        let verifier = self.credential_verifier.clone();
        let password_hash = tokio::task::spawn_blocking(move || verifier.hash_secret(&password))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))??;

        let user = match self
            .user_repository
            .create(User::new(name, email, password_hash))
            .await
        {
            Ok(user) => user,
            Err(DomainError::Auth(AuthError::EmailAlreadyTaken { email })) => {
                tracing::info!(email = %email, "Registration lost race for email");
                return Err(AuthError::EmailAlreadyTaken { email }.into());
            }
            Err(e) => return Err(e),
        };

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Log in with email and password
    ///
    /// Unknown email and wrong password both fail with
    /// `AuthError::InvalidCredentials` and take comparable time.
    ///
    /// # Returns
    ///
    /// * `Ok(LoginOutcome)` - The user and a freshly issued session token
    /// * `Err(DomainError)` - Invalid credentials or storage failure
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginOutcome> {
        let user = self.user_repository.find_by_email(email).await?;

        let verifier = self.credential_verifier.clone();
        let attempt = password.to_string();
        let (user, verified) = tokio::task::spawn_blocking(move || match user {
            Some(user) => {
                let verified = verifier.verify_secret(&user.password_hash, &attempt);
                (Some(user), verified)
            }
            None => (None, verifier.verify_against_dummy(&attempt)),
        })
        .await
        .map_err(|e| DomainError::internal(format!("Password verification task failed: {}", e)))?;

        let user = match (user, verified) {
            (Some(user), true) => user,
            _ => {
                tracing::warn!("Login rejected: invalid credentials");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let token = self.session_service.issue(user.id).await?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(LoginOutcome { user, token })
    }

    /// Resolve a session token to the public profile of its user
    ///
    /// A token whose user no longer exists is treated as invalid.
    ///
    /// # Returns
    ///
    /// * `Ok(UserProfile)` - id, name and email of the token's owner
    /// * `Err(DomainError)` - Missing, unknown or expired token, or storage failure
    pub async fn validate_token(&self, token: &str) -> DomainResult<UserProfile> {
        let user_id = self.session_service.resolve(token).await?;

        match self.user_repository.find_by_id(user_id).await? {
            Some(user) => Ok(user.profile()),
            None => {
                tracing::warn!(user_id = %user_id, "Session bound to missing user");
                Err(TokenError::InvalidToken.into())
            }
        }
    }
}
