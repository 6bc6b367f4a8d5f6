//! Error types for cricket-stats HTTP handlers
//!
//! Not-found answers are a bare 404. Every other failure carries the same
//! JSON envelope:
//!
//! ```json
//! { "error": { "code": "DATABASE_ERROR", "message": "..." } }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error, warn};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Unparseable request body (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Store operation failed (500)
    #[error("Failed to {operation}: {source}")]
    Storage {
        operation: &'static str,
        source: cricket_common::Error,
    },
}

impl ApiError {
    /// Error constructor for `map_err`, naming the store operation that failed
    pub fn storage(operation: &'static str) -> impl FnOnce(cricket_common::Error) -> ApiError {
        move |source| ApiError::Storage { operation, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, error_code) = match self {
            ApiError::NotFound(ref what) => {
                debug!("Not found: {}", what);
                return StatusCode::NOT_FOUND.into_response();
            }
            ApiError::BadRequest(_) => {
                warn!("{}", message);
                (StatusCode::BAD_REQUEST, "BAD_REQUEST")
            }
            ApiError::Storage { ref source, .. } => {
                error!("{}", message);
                let code = match source {
                    cricket_common::Error::Database(_) => "DATABASE_ERROR",
                    _ => "INTERNAL_ERROR",
                };
                (StatusCode::INTERNAL_SERVER_ERROR, code)
            }
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
