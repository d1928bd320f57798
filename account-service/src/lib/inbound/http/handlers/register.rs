use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use crate::domain::account::models::Credential;
use crate::domain::account::models::Envelope;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let envelope = state.auth_service.register(body.into_credential()).await?;
    Ok(Json(envelope))
}

/// Raw registration body. Fields default to absent or empty when missing
/// from the JSON, so presence failures surface as the flow's validation
/// messages, in the flow's order, instead of a deserialization rejection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl RegisterRequestBody {
    fn into_credential(self) -> Credential {
        Credential {
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}
