use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// One-way password hasher (Argon2id).
///
/// Cost parameters are fixed at construction and constant for the process
/// lifetime. A fresh random salt is drawn on every call, so hashing the same
/// password twice yields different digests.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a hasher with the recommended Argon2id cost parameters.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hash a plaintext password into a PHC-format digest.
    ///
    /// The digest embeds the algorithm, cost parameters, and per-call salt,
    /// so verification needs nothing beyond the digest itself.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Errors
    /// * `HashingFailed` - the hashing primitive rejected the input
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// Comparison happens inside the hashing primitive (recompute and
    /// check), never as a raw byte compare. A mismatch is `Ok(false)`; only
    /// a digest that cannot be parsed is an error.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to check
    /// * `digest` - Stored digest in PHC string format
    ///
    /// # Errors
    /// * `VerificationFailed` - the stored digest is not a valid PHC string
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        let parsed = PasswordHash::new(digest)
            .map_err(|e| PasswordError::VerificationFailed(format!("invalid digest: {}", e)))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
