use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::extract::{self, Params, Payload};
use crate::models::{Candidate, Outcome, Viewer};
use crate::routes::Ack;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListParams {
    pub user: Option<String>,
    pub role: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateRequest {
    pub id: i64,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default, deserialize_with = "extract::flag")]
    pub called: bool,
    #[serde(default)]
    pub called_by: Option<String>,
    #[serde(default)]
    pub called_at: Option<String>,
}

impl UpdateRequest {
    fn outcome(self) -> Outcome {
        Outcome {
            remarks: self.remarks.unwrap_or_default(),
            called: self.called,
            called_by: self.called_by.unwrap_or_default(),
            called_at: self.called_at.unwrap_or_default(),
        }
    }
}

pub async fn list(
    State(state): State<SharedState>,
    Params(params): Params<ListParams>,
) -> Result<Json<Vec<Candidate>>, AppError> {
    let viewer = Viewer::from_query(params.user.as_deref(), params.role.as_deref());
    let candidates = db::candidates::list_visible_to(&state.pool, &viewer).await?;
    Ok(Json(candidates))
}

/// Last write wins. Updating an id that does not exist still succeeds.
pub async fn update(
    State(state): State<SharedState>,
    Payload(req): Payload<UpdateRequest>,
) -> Result<Json<Ack>, AppError> {
    let id = req.id;
    let rows = db::candidates::update_outcome(&state.pool, id, &req.outcome()).await?;
    if rows == 0 {
        tracing::debug!("Outcome update for candidate {id} matched no rows");
    }
    Ok(Json(Ack::OK))
}
