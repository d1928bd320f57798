use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    SigningFailed(String),

    #[error("token is expired")]
    Expired,

    #[error("token is invalid: {0}")]
    Invalid(String),
}
