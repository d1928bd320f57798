/*!
Ports for the credential authentication domain.

`AuthServicePort` is the inbound port the HTTP layer drives;
`UserRepository` and `CredentialHasher` are the outbound ports the service
drives. All are object-safe so transports and tests can hold them behind
`Arc<dyn _>` and swap implementations freely.
*/

use async_trait::async_trait;

use crate::domain::account::errors::AuthError;
use crate::domain::account::errors::HashingError;
use crate::domain::account::errors::RepositoryError;
use crate::domain::account::models::Authenticated;
use crate::domain::account::models::Credential;
use crate::domain::account::models::Envelope;
use crate::domain::account::models::UserRecord;

/// Inbound port exposing the two credential flows.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user from raw credential input.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Validation`] if a field fails the register rules.
    /// - [`AuthError::DuplicateEmail`] if the email is already registered.
    /// - [`AuthError::Hashing`] if the digest primitive fails.
    /// - [`AuthError::Repository`] for any other persistence failure,
    ///   passed through unchanged.
    async fn register(&self, credential: Credential) -> Result<Envelope<()>, AuthError>;

    /// Authenticate an existing user and issue a signed bearer token.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Validation`] if a field fails the login rules.
    /// - [`AuthError::UserNotFound`] if no record exists for the email.
    /// - [`AuthError::InvalidCredentials`] if the password does not match
    ///   the stored digest.
    /// - [`AuthError::Hashing`] if the verification primitive fails.
    /// - [`AuthError::TokenSigning`] if the token cannot be signed.
    /// - [`AuthError::Repository`] if the lookup fails.
    async fn login(&self, credential: Credential) -> Result<Authenticated, AuthError>;
}

/// Outbound port for user persistence.
///
/// Email uniqueness is the store's concern and must be enforced at write
/// time; implementations report a conflicting insert as
/// [`RepositoryError::UniqueViolation`] rather than pre-checking with a
/// read.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user record.
    ///
    /// # Errors
    ///
    /// - [`RepositoryError::UniqueViolation`] if the email already exists.
    /// - [`RepositoryError::SchemaViolation`] if a column rule rejects the
    ///   record.
    /// - [`RepositoryError::Database`] if the write fails.
    async fn create(&self, record: UserRecord) -> Result<(), RepositoryError>;

    /// Look up a record by exact, case-sensitive email match.
    ///
    /// # Errors
    ///
    /// - [`RepositoryError::Database`] if the lookup fails.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError>;
}

/// Outbound port for the one-way digest primitive.
///
/// Async so implementations can move the CPU-bound work off the request's
/// execution context.
#[async_trait]
pub trait CredentialHasher: Send + Sync + 'static {
    /// Produce a salted one-way digest of the plaintext.
    async fn hash(&self, password: &str) -> Result<String, HashingError>;

    /// Check the plaintext against a stored digest. A mismatch is
    /// `Ok(false)`; an error means the digest itself could not be
    /// processed.
    async fn verify(&self, password: &str, digest: &str) -> Result<bool, HashingError>;
}
