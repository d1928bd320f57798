use thiserror::Error;

/// Error type for password hashing operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    HashingFailed(String),

    #[error("password verification failed: {0}")]
    VerificationFailed(String),
}
