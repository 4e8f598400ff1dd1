use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::error::AppError;
use crate::extract::RawBody;
use crate::import::{multipart, pipeline, ImportSummary};
use crate::state::SharedState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(flatten)]
    pub summary: ImportSummary,
}

pub async fn upload(
    State(state): State<SharedState>,
    headers: HeaderMap,
    RawBody(body): RawBody,
) -> Result<Json<UploadResponse>, AppError> {
    let form = multipart::parse_upload(&headers, body).await?;
    let summary = pipeline::run(&state.pool, &state.config.upload_dir, form).await?;
    Ok(Json(UploadResponse {
        success: true,
        summary,
    }))
}
