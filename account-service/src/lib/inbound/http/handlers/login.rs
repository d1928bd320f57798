use axum::extract::State;
use axum::http::HeaderValue;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::TOKEN_HEADER;
use crate::domain::account::models::Authenticated;
use crate::domain::account::models::Credential;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<LoginResponse, ApiError> {
    let authenticated = state.auth_service.login(body.into_credential()).await?;
    Ok(LoginResponse(authenticated))
}

/// Raw login body. Fields default to empty when missing so presence
/// failures come from the flow's rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl LoginRequestBody {
    fn into_credential(self) -> Credential {
        Credential {
            name: None,
            email: self.email,
            password: self.password,
        }
    }
}

/// Successful login response: the envelope as the JSON body, the bearer
/// token in the [`TOKEN_HEADER`] header and nowhere in the body.
#[derive(Debug, Clone)]
pub struct LoginResponse(Authenticated);

impl IntoResponse for LoginResponse {
    fn into_response(self) -> Response {
        let Authenticated { envelope, token } = self.0;

        let mut response = Json(envelope).into_response();
        match HeaderValue::from_str(&token) {
            Ok(value) => {
                response.headers_mut().insert(TOKEN_HEADER, value);
            }
            // A compact JWS is always a valid header value; reachable only
            // with a broken issuer.
            Err(_) => tracing::error!("issued token is not a valid header value"),
        }
        response
    }
}
