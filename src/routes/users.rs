use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::extract::Payload;
use crate::models::{Role, UserSummary};
use crate::routes::Ack;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateUser {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Telecaller accounts only; the role is never taken from the request.
pub async fn create(
    State(state): State<SharedState>,
    Payload(req): Payload<CreateUser>,
) -> Result<Json<Ack>, AppError> {
    let username = req.username.trim();
    if username.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "Username and password are required".to_string(),
        ));
    }

    let pw_hash = password::hash(&req.password).await?;

    db::users::create(&state.pool, username, &pw_hash, Role::Telecaller)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("A user with this username already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

    tracing::info!("Created telecaller {username}");
    Ok(Json(Ack::OK))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<UserSummary>>, AppError> {
    let users = db::users::list_usernames_by_role(&state.pool, Role::Telecaller).await?;
    Ok(Json(users))
}
