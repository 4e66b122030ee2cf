//! Error types for the contract analysis API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use extraction_engine::ExtractError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("File too large: {0} bytes (limit {1})")]
    FileTooLarge(usize, usize),

    #[error(transparent)]
    Extraction(#[from] ExtractError),

    #[error("Analysis timed out after {0}ms")]
    AnalysisTimeout(u64),

    #[error("Analysis provider error: {0}")]
    Analysis(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::UnsupportedFileType(mime)
            | ApiError::Extraction(ExtractError::UnsupportedFileType(mime)) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                format!("Unsupported file type: {}. Upload a PDF or DOCX document.", mime),
            ),
            ApiError::FileTooLarge(size, limit) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("File too large: {} bytes (limit {} bytes)", size, limit),
            ),
            // Timeout gets its own status and message so users retry with a
            // smaller file instead of retrying blindly
            ApiError::Extraction(ExtractError::Timeout(_)) => (
                StatusCode::REQUEST_TIMEOUT,
                "Text extraction timed out. The file may be too complex; try a smaller document."
                    .to_string(),
            ),
            ApiError::Extraction(e) => {
                tracing::error!("Extraction error: {}", e);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Failed to process the uploaded file".to_string(),
                )
            }
            ApiError::AnalysisTimeout(_) => (
                StatusCode::REQUEST_TIMEOUT,
                "Analysis timed out. Try again with a smaller document.".to_string(),
            ),
            ApiError::Analysis(e) => {
                tracing::error!("Analysis provider error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Analysis provider failed".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
