//! Field rules for the register and login flows.
//!
//! Pure, synchronous checks over raw input; no I/O and no shared state.
//! Name length bounds and email shape are deliberately absent here: those
//! belong to the store's schema (see `outbound::repositories::user`), while
//! this module owns presence and the password length rule.

use crate::domain::account::errors::AuthError;
use crate::domain::account::errors::ValidationError;

/// Exact password length the service accepts, counted in characters.
pub const PASSWORD_LENGTH: usize = 8;

/// Reject an absent or empty name.
pub fn has_name(name: Option<&str>) -> Result<(), ValidationError> {
    match name {
        Some(name) if !name.is_empty() => Ok(()),
        _ => Err(ValidationError::MissingName),
    }
}

/// Reject an empty email. Presence only; shape is the schema's rule.
pub fn has_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    Ok(())
}

/// Reject an empty password, then one that is not exactly
/// [`PASSWORD_LENGTH`] characters long.
pub fn has_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::MissingPassword);
    }

    let actual = password.chars().count();
    if actual != PASSWORD_LENGTH {
        return Err(ValidationError::PasswordLength {
            expected: PASSWORD_LENGTH,
            actual,
        });
    }
    Ok(())
}

/// Validate registration input: name, then email, then password.
///
/// Short-circuits on the first failing rule. The ordering is part of the
/// contract: a request missing both name and email reports the name error.
pub fn validate_register(
    name: Option<&str>,
    email: &str,
    password: &str,
) -> Result<(), ValidationError> {
    has_name(name)?;
    has_email(email)?;
    has_password(password)
}

/// Validate login input: email, then password, with the same
/// short-circuiting.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    has_email(email)?;
    has_password(password)
}

/// Unwrap a lookup result, rejecting absent records.
pub fn require_found<T>(record: Option<T>) -> Result<T, AuthError> {
    record.ok_or(AuthError::UserNotFound)
}
