//! Error types for the Moodline HTTP API server.

use axum::response::IntoResponse;
use moodline_analysis::AnalysisError;
use thiserror::Error;

/// Main error type for API operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed multipart upload.
    #[error("Upload error: {0}")]
    Upload(String),

    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The transcript contained no recognizable user messages.
    #[error("No valid chat messages found. Please upload a valid chat export.")]
    NoMessages,

    /// The classifier failed mid-request.
    #[error("Sentiment classifier failure: {0}")]
    Classifier(String),

    /// Internal server error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Result alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<AnalysisError> for ApiError {
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::EmptyInput => ApiError::NoMessages,
            AnalysisError::Classifier(msg) => ApiError::Classifier(msg),
            AnalysisError::ModelLoading(msg) => ApiError::Internal(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl ApiError {
    /// Convert to HTTP status code.
    pub fn status_code(&self) -> axum::http::StatusCode {
        match self {
            ApiError::Io(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upload(_) => axum::http::StatusCode::BAD_REQUEST,
            ApiError::InvalidRequest(_) => axum::http::StatusCode::BAD_REQUEST,
            ApiError::NoMessages => axum::http::StatusCode::BAD_REQUEST,
            ApiError::Classifier(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": self.to_string(),
            "code": status.as_u16(),
        });
        (status, axum::Json(body)).into_response()
    }
}
