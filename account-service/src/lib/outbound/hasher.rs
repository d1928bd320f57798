use async_trait::async_trait;

use crate::domain::account::errors::HashingError;
use crate::domain::account::ports::CredentialHasher;

/// Argon2id implementation of the hashing port.
///
/// Digest computation is CPU-bound and takes tens of milliseconds at the
/// configured cost, so both operations run on tokio's blocking pool rather
/// than the request's worker thread. Concurrent requests hash
/// independently; nothing here is shared mutable state.
#[derive(Clone, Default)]
pub struct Argon2CredentialHasher {
    inner: auth::PasswordHasher,
}

impl Argon2CredentialHasher {
    pub fn new() -> Self {
        Self {
            inner: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    async fn hash(&self, password: &str) -> Result<String, HashingError> {
        let hasher = self.inner.clone();
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| HashingError::HashFailed(e.to_string()))?
            .map_err(|e| HashingError::HashFailed(e.to_string()))
    }

    async fn verify(&self, password: &str, digest: &str) -> Result<bool, HashingError> {
        let hasher = self.inner.clone();
        let password = password.to_owned();
        let digest = digest.to_owned();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| HashingError::VerifyFailed(e.to_string()))?
            .map_err(|e| HashingError::VerifyFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify_round_trip() {
        let hasher = Argon2CredentialHasher::new();

        let digest = hasher.hash("pa55w0rd").await.expect("hash failed");
        assert!(hasher
            .verify("pa55w0rd", &digest)
            .await
            .expect("verify failed"));
        assert!(!hasher
            .verify("wrong-pw", &digest)
            .await
            .expect("verify failed"));
    }

    #[tokio::test]
    async fn test_malformed_digest_is_an_error_not_a_mismatch() {
        let hasher = Argon2CredentialHasher::new();

        let result = hasher.verify("pa55w0rd", "not-a-digest").await;
        assert!(matches!(result, Err(HashingError::VerifyFailed(_))));
    }
}
