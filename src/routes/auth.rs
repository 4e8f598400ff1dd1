use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::auth::{self, LoginOutcome};
use crate::error::AppError;
use crate::extract::Payload;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login(
    State(state): State<SharedState>,
    Payload(req): Payload<LoginRequest>,
) -> Result<Json<LoginOutcome>, AppError> {
    let outcome = auth::authenticate(&state.pool, &req.username, &req.password).await?;
    Ok(Json(outcome))
}
