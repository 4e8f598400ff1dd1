use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Failures reachable from a handler. Every variant renders as a
/// `{"success": false, "error": <code>, "message": <text>}` body; only
/// malformed, oversized and timed-out requests get a non-200 status.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    PayloadTooLarge(String),
    Timeout,
    Conflict(String),
    InvalidSpreadsheet(String),
    Internal(String),
    Database(sqlx::Error),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "invalid_request",
            AppError::PayloadTooLarge(_) => "payload_too_large",
            AppError::Timeout => "timeout",
            AppError::Conflict(_) => "conflict",
            AppError::InvalidSpreadsheet(_) => "invalid_spreadsheet",
            AppError::Internal(_) => "internal",
            AppError::Database(_) => "storage_error",
        }
    }

    /// Map a body or query extractor rejection, keeping the size limit
    /// distinct from other malformed input.
    pub fn rejected(status: StatusCode, text: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(text)
        } else {
            AppError::BadRequest(text)
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::PayloadTooLarge(msg) => write!(f, "Payload Too Large: {msg}"),
            AppError::Timeout => write!(f, "Request Timeout"),
            AppError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            AppError::InvalidSpreadsheet(msg) => write!(f, "Invalid Spreadsheet: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
            AppError::Database(err) => write!(f, "Database Error: {err}"),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg.clone()),
            AppError::Timeout => (
                StatusCode::REQUEST_TIMEOUT,
                "Request took too long".to_string(),
            ),
            AppError::Conflict(msg) => (StatusCode::OK, msg.clone()),
            AppError::InvalidSpreadsheet(msg) => (StatusCode::OK, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (StatusCode::OK, "Internal server error".to_string())
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {err}");
                (StatusCode::OK, "Storage operation failed".to_string())
            }
        };

        let body = json!({
            "success": false,
            "error": self.code(),
            "message": message,
        });
        (status, axum::Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("Blocking task failed: {err}"))
    }
}
