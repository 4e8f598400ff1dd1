use std::path::Path;

use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::error::AppError;

use super::fields;
use super::multipart::UploadForm;
use super::staging::StagedUpload;
use super::workbook;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub imported: u64,
    pub skipped: u64,
}

/// Stage the uploaded workbook, insert every valid row of its first sheet and
/// remove the staged file. Rows are inserted one statement at a time, so a
/// storage error partway through leaves the earlier rows in place.
pub async fn run(
    pool: &SqlitePool,
    upload_dir: &Path,
    form: UploadForm,
) -> Result<ImportSummary, AppError> {
    let file = form
        .file
        .ok_or_else(|| AppError::BadRequest("Missing file field".to_string()))?;

    let dir = upload_dir.to_path_buf();
    let (staged, rows) = tokio::task::spawn_blocking(move || {
        let staged = StagedUpload::write(&dir, file.file_name.as_deref(), &file.data)
            .map_err(|e| AppError::Internal(format!("Failed to stage upload: {e}")))?;
        // On a parse failure the guard drops here and removes the file.
        let rows = workbook::read_first_sheet(staged.path())
            .map_err(AppError::InvalidSpreadsheet)?;
        Ok::<_, AppError>((staged, rows))
    })
    .await??;

    let mut summary = ImportSummary::default();
    for row in &rows {
        match fields::candidate_from_row(row, &form.assign_to) {
            Some(candidate) => {
                db::candidates::insert(pool, &candidate).await?;
                summary.imported += 1;
            }
            None => summary.skipped += 1,
        }
    }

    if let Err(e) = tokio::task::spawn_blocking(move || staged.close()).await? {
        tracing::warn!("Failed to remove staged upload: {e}");
    }

    tracing::info!(
        imported = summary.imported,
        skipped = summary.skipped,
        assign_to = %form.assign_to,
        "Candidate import finished"
    );

    Ok(summary)
}
