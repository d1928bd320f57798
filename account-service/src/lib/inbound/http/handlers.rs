use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::account::errors::AuthError;

pub mod login;
pub mod register;

/// Response header carrying the bearer token on successful login.
pub const TOKEN_HEADER: &str = "authorization-token";

/// Body of every failed request: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Boundary wrapper turning every flow failure into `400 Bad Request` with
/// an [`ErrorBody`].
///
/// An unknown email and a wrong password produce byte-identical responses,
/// so the login endpoint cannot be used to probe which emails are
/// registered. The distinct kinds still reach the logs.
#[derive(Debug)]
pub struct ApiError(AuthError);

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = match &self.0 {
            AuthError::UserNotFound | AuthError::InvalidCredentials => {
                tracing::warn!(reason = %self.0, "login rejected");
                AuthError::InvalidCredentials.to_string()
            }
            AuthError::Hashing(_) | AuthError::TokenSigning(_) | AuthError::Repository(_) => {
                tracing::error!(error = %self.0, "credential flow failed");
                self.0.to_string()
            }
            AuthError::Validation(_) | AuthError::DuplicateEmail => self.0.to_string(),
        };

        (StatusCode::BAD_REQUEST, Json(ErrorBody { error })).into_response()
    }
}
