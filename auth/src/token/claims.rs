use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by an access token.
///
/// Claims identify the authenticated principal and nothing else: the subject
/// is the registered email address, never a credential. `exp` is mandatory;
/// a token that lacks it fails verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Subject: registered email of the authenticated principal.
    pub sub: String,

    /// Issued at (Unix timestamp, seconds).
    pub iat: i64,

    /// Expiration time (Unix timestamp, seconds).
    pub exp: i64,
}

impl AccessClaims {
    /// Build claims for a principal, stamping issuance now and expiry
    /// `valid_for` from now.
    ///
    /// # Arguments
    /// * `subject` - Identifier of the authenticated principal
    /// * `valid_for` - How long the token stays valid
    pub fn for_subject(subject: impl Into<String>, valid_for: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + valid_for).timestamp(),
        }
    }

    /// Whether the claims are past their expiry at `now` (Unix seconds).
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject_sets_timestamps() {
        let claims = AccessClaims::for_subject("rob@example.com", Duration::hours(24));

        assert_eq!(claims.sub, "rob@example.com");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
        assert!(claims.iat <= Utc::now().timestamp());
    }

    #[test]
    fn test_is_expired() {
        let claims = AccessClaims {
            sub: "rob@example.com".to_string(),
            iat: 900,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000)); // exactly at expiry is still valid
        assert!(claims.is_expired(1001));
    }
}
