use thiserror::Error;

/// Failure of a single field rule during input validation.
///
/// The display strings are the exact messages returned to callers; they
/// name the field and the rule that rejected it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    MissingName,

    #[error("email must not be empty")]
    MissingEmail,

    #[error("password must not be empty")]
    MissingPassword,

    #[error("password must be exactly {expected} characters, got {actual}")]
    PasswordLength { expected: usize, actual: usize },
}

/// Failure of the one-way digest primitive.
#[derive(Debug, Clone, Error)]
pub enum HashingError {
    #[error("password hashing failed: {0}")]
    HashFailed(String),

    #[error("password verification failed: {0}")]
    VerifyFailed(String),
}

/// Failure surfaced by the persistence port.
///
/// `UniqueViolation` stays a distinct variant: the register flow translates
/// it into a duplicate-email rejection, while every other persistence
/// failure passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("unique constraint {constraint} violated")]
    UniqueViolation { constraint: String },

    /// A column rule of the store's schema rejected the record, e.g. the
    /// name length bounds or the email shape.
    #[error("{0}")]
    SchemaViolation(String),

    #[error("database error: {0}")]
    Database(String),
}

/// Top-level failure of the register and login flows.
///
/// Every failure is terminal for its request; flows never retry and never
/// swallow an error.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("email already registered")]
    DuplicateEmail,

    #[error("user not registered")]
    UserNotFound,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Hashing(#[from] HashingError),

    #[error("token signing failed: {0}")]
    TokenSigning(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
