use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Pipeline stages raise distinct variants rather than sentinel values; only
/// this module maps them to status codes and user-facing messages.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Upload too large: {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Extraction service error: {0}")]
    ExtractionService(String),

    #[error("Extraction parse error: {0}")]
    ExtractionParse(String),

    #[error("Render error in section '{section}': {message}")]
    Render { section: String, message: String },

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn render(section: &str, message: impl Into<String>) -> Self {
        AppError::Render {
            section: section.to_string(),
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedFormat(msg) => (
                StatusCode::BAD_REQUEST,
                "UNSUPPORTED_FORMAT",
                format!("Unsupported file type: {msg}"),
            ),
            AppError::PayloadTooLarge(size) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                format!("File too large ({size} bytes)"),
            ),
            AppError::ExtractionService(msg) => {
                tracing::error!("Extraction service error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "EXTRACTION_SERVICE_ERROR",
                    "The extraction service call failed; the upload can be retried".to_string(),
                )
            }
            AppError::ExtractionParse(msg) => {
                tracing::error!("Extraction parse error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "EXTRACTION_PARSE_ERROR",
                    format!("The extraction service returned malformed data: {msg}"),
                )
            }
            AppError::Render { section, message } => {
                tracing::error!("Render error in section '{section}': {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    format!("Failed to render section '{section}'"),
                )
            }
            AppError::Export(msg) => {
                tracing::error!("Export error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_ERROR",
                    "Document export failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
