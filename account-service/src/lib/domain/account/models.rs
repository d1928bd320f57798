use serde::Serialize;

/// Raw credential input for one register or login request.
///
/// Transient by design: carried from the transport to the flow, validated,
/// consumed, and dropped. The plaintext password is never persisted and
/// never appears in any output type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Display name; required for register, absent for login.
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

/// The slice of a stored user the authentication flows read and write.
///
/// The store owns the full row (generated key, timestamps); the flows only
/// ever see this projection. Records are written once at registration and
/// never updated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Public projection of a user, echoed back on login. The digest never
/// crosses this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicUser {
    pub name: String,
    pub email: String,
}

impl From<&UserRecord> for PublicUser {
    fn from(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
        }
    }
}

/// Uniform result shape both flows produce: an outcome flag, a
/// human-readable message, and an optional payload that is omitted from the
/// serialized form when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
    pub done: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<T>,
}

impl<T> Envelope<T> {
    /// Success envelope without a payload.
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            done: true,
            message: message.into(),
            arg: None,
        }
    }

    /// Success envelope carrying a payload.
    pub fn with_arg(message: impl Into<String>, arg: T) -> Self {
        Self {
            done: true,
            message: message.into(),
            arg: Some(arg),
        }
    }
}

/// Successful login outcome: the envelope destined for the response body
/// plus the signed bearer token, which the transport must deliver in a
/// response header rather than the body.
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub envelope: Envelope<PublicUser>,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_omits_absent_arg() {
        let envelope: Envelope<()> = Envelope::done("user registered successfully");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["done"], true);
        assert_eq!(json["message"], "user registered successfully");
        assert!(json.get("arg").is_none());
    }

    #[test]
    fn test_envelope_carries_arg_when_present() {
        let user = PublicUser {
            name: "robert".to_string(),
            email: "rob@example.com".to_string(),
        };
        let envelope = Envelope::with_arg("user logged in successfully", user);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["done"], true);
        assert_eq!(json["arg"]["name"], "robert");
        assert_eq!(json["arg"]["email"], "rob@example.com");
    }

    #[test]
    fn test_public_user_drops_the_digest() {
        let record = UserRecord {
            name: "robert".to_string(),
            email: "rob@example.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
        };

        let json = serde_json::to_value(PublicUser::from(&record)).unwrap();

        assert_eq!(json["name"], "robert");
        assert_eq!(json["email"], "rob@example.com");
        assert!(json.get("password_hash").is_none());
    }
}
