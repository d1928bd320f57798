use std::sync::Arc;

use async_trait::async_trait;
use auth::AccessClaims;
use auth::TokenIssuer;
use chrono::Duration;

use crate::domain::account::errors::AuthError;
use crate::domain::account::errors::RepositoryError;
use crate::domain::account::models::Authenticated;
use crate::domain::account::models::Credential;
use crate::domain::account::models::Envelope;
use crate::domain::account::models::PublicUser;
use crate::domain::account::models::UserRecord;
use crate::domain::account::ports::AuthServicePort;
use crate::domain::account::ports::CredentialHasher;
use crate::domain::account::ports::UserRepository;
use crate::domain::account::validation;

/// Message returned on successful registration.
const REGISTERED: &str = "user registered successfully";

/// Message returned on successful login.
const LOGGED_IN: &str = "user logged in successfully";

/// Orchestrates the two credential flows over injected collaborators.
///
/// Stateless across requests; the only long-lived pieces are the injected
/// ports and the token issuer's signing secret, all read-only after
/// construction. Each flow runs validation before any I/O and stops at the
/// first failure.
pub struct AuthService<R, H>
where
    R: UserRepository,
    H: CredentialHasher,
{
    repository: Arc<R>,
    hasher: Arc<H>,
    token_issuer: TokenIssuer,
    token_ttl: Duration,
}

impl<R, H> AuthService<R, H>
where
    R: UserRepository,
    H: CredentialHasher,
{
    /// Create a new service.
    ///
    /// # Arguments
    ///
    /// - `repository`: user persistence implementation.
    /// - `hasher`: one-way digest implementation.
    /// - `token_issuer`: signs bearer tokens with the server-held secret.
    /// - `token_ttl_hours`: hours until an issued token expires.
    pub fn new(
        repository: Arc<R>,
        hasher: Arc<H>,
        token_issuer: TokenIssuer,
        token_ttl_hours: i64,
    ) -> Self {
        Self {
            repository,
            hasher,
            token_issuer,
            token_ttl: Duration::hours(token_ttl_hours),
        }
    }
}

#[async_trait]
impl<R, H> AuthServicePort for AuthService<R, H>
where
    R: UserRepository,
    H: CredentialHasher,
{
    async fn register(&self, credential: Credential) -> Result<Envelope<()>, AuthError> {
        let Credential {
            name,
            email,
            password,
        } = credential;

        // A validation failure must not touch the hasher or the store.
        validation::validate_register(name.as_deref(), &email, &password)?;

        let password_hash = self.hasher.hash(&password).await?;

        let record = UserRecord {
            name: name.unwrap_or_default(),
            email,
            password_hash,
        };

        // Uniqueness is resolved by the store at write time; of two racing
        // registrations for the same email exactly one lands here as a
        // violation.
        match self.repository.create(record).await {
            Ok(()) => Ok(Envelope::done(REGISTERED)),
            Err(RepositoryError::UniqueViolation { .. }) => Err(AuthError::DuplicateEmail),
            Err(err) => Err(AuthError::from(err)),
        }
    }

    async fn login(&self, credential: Credential) -> Result<Authenticated, AuthError> {
        validation::validate_login(&credential.email, &credential.password)?;

        let record = self.repository.find_by_email(&credential.email).await?;
        let record = validation::require_found(record)?;

        let matches = self
            .hasher
            .verify(&credential.password, &record.password_hash)
            .await?;
        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        let claims = AccessClaims::for_subject(record.email.as_str(), self.token_ttl);
        let token = self
            .token_issuer
            .sign(&claims)
            .map_err(|e| AuthError::TokenSigning(e.to_string()))?;

        Ok(Authenticated {
            envelope: Envelope::with_arg(LOGGED_IN, PublicUser::from(&record)),
            token,
        })
    }
}
