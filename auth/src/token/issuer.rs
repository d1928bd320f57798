use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::TokenError;

/// Signs and verifies bearer tokens with a server-held secret.
///
/// The secret is supplied once at construction and stays constant for the
/// process lifetime. HS256 throughout.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenIssuer {
    /// Create an issuer from the signing secret.
    ///
    /// # Arguments
    /// * `secret` - Signing secret; at least 32 bytes for HS256, supplied
    ///   from configuration, never from source
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Serialize and sign a claim set into a compact token string.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode (must implement Serialize)
    ///
    /// # Errors
    /// * `SigningFailed` - claim serialization or signing failed
    pub fn sign<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// The `exp` claim is required: tokens that omit it or are past it are
    /// rejected.
    ///
    /// # Arguments
    /// * `token` - Compact token string to verify
    ///
    /// # Errors
    /// * `Expired` - the `exp` claim is in the past
    /// * `Invalid` - bad signature, malformed token, or missing `exp`
    pub fn verify<T: DeserializeOwned>(&self, token: &str) -> Result<T, TokenError> {
        let validation = Validation::new(self.algorithm);

        let data = decode::<T>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            }
        })?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;

    use super::*;
    use crate::token::claims::AccessClaims;

    #[test]
    fn test_sign_and_verify() {
        let issuer = TokenIssuer::new(b"my_secret_key_at_least_32_bytes_long!");
        let claims = AccessClaims::for_subject("rob@example.com", Duration::hours(1));

        let token = issuer.sign(&claims).expect("Failed to sign token");
        assert!(!token.is_empty());

        let decoded: AccessClaims = issuer.verify(&token).expect("Failed to verify token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_verify_garbage_token() {
        let issuer = TokenIssuer::new(b"my_secret_key_at_least_32_bytes_long!");

        let result = issuer.verify::<AccessClaims>("not.a.token");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let signer = TokenIssuer::new(b"secret1_at_least_32_bytes_long_key!");
        let verifier = TokenIssuer::new(b"secret2_at_least_32_bytes_long_key!");

        let claims = AccessClaims::for_subject("rob@example.com", Duration::hours(1));
        let token = signer.sign(&claims).expect("Failed to sign token");

        let result = verifier.verify::<AccessClaims>(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_verify_expired_token() {
        let issuer = TokenIssuer::new(b"my_secret_key_at_least_32_bytes_long!");

        // Expired well past the decoder's leeway window.
        let now = Utc::now().timestamp();
        let claims = AccessClaims {
            sub: "rob@example.com".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };

        let token = issuer.sign(&claims).expect("Failed to sign token");
        let result = issuer.verify::<AccessClaims>(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_verify_rejects_claims_without_expiry() {
        #[derive(serde::Serialize)]
        struct BareClaims {
            sub: String,
        }

        let issuer = TokenIssuer::new(b"my_secret_key_at_least_32_bytes_long!");
        let token = issuer
            .sign(&BareClaims {
                sub: "rob@example.com".to_string(),
            })
            .expect("Failed to sign token");

        let result = issuer.verify::<AccessClaims>(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }
}
