use axum::http::HeaderMap;
use bytes::Bytes;

use crate::error::AppError;

/// Multipart field carrying the spreadsheet.
pub const FILE_FIELD: &str = "file";
/// Optional text field naming the telecaller to assign rows to.
pub const ASSIGN_FIELD: &str = "assign_to";

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub data: Bytes,
}

#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub file: Option<UploadedFile>,
    pub assign_to: String,
}

/// Parse an upload form using multer. Unknown fields are drained and ignored;
/// a repeated `file` field keeps the first one.
pub async fn parse_upload(headers: &HeaderMap, body: Bytes) -> Result<UploadForm, AppError> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| AppError::BadRequest("Expected multipart/form-data upload".to_string()))?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut form = UploadForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Multipart error: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(FILE_FIELD) if form.file.is_none() => {
                let file_name = field.file_name().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("File read error: {e}")))?;
                form.file = Some(UploadedFile { file_name, data });
            }
            Some(ASSIGN_FIELD) => {
                form.assign_to = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Field read error: {e}")))?
                    .trim()
                    .to_string();
            }
            _ => {
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Field read error: {e}")))?;
            }
        }
    }

    Ok(form)
}
