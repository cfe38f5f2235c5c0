/// Error types for vidtube-service
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// Anchor entity absent. A normal, expected outcome for lookups.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed filter/sort/pagination parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Underlying store call failed or timed out. Retryable by the caller;
    /// the core performs no retries of its own.
    #[error("Store unavailable: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // NotFound is an expected outcome, not an operational failure
        match self {
            AppError::NotFound(_) => {}
            other => tracing::error!("request failed: {}", other),
        }

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }))
    }
}
