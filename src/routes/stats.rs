use axum::extract::State;
use axum::Json;

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;
use crate::stats::{compute, Stats};

/// Recomputed from a full table scan on every request.
pub async fn stats(State(state): State<SharedState>) -> Result<Json<Stats>, AppError> {
    let candidates = db::candidates::list_all(&state.pool).await?;
    Ok(Json(compute(&candidates)))
}
