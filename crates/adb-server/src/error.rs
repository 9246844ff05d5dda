use adb_service::ServiceError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("store error: {0}")]
    Store(#[from] adb_store::StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Failure of a single HTTP request, rendered as `{"error": ...}`.
#[derive(Debug)]
pub enum ApiError {
    /// The request body was not a valid create command.
    InvalidBody,
    Service(ServiceError),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidBody => (StatusCode::BAD_REQUEST, "Invalid request body".to_string()),
            Self::Service(err) => match err {
                ServiceError::Validation(_) | ServiceError::InvalidArgument(_) => {
                    (StatusCode::BAD_REQUEST, err.to_string())
                }
                ServiceError::NotFound(msg) => {
                    tracing::debug!(%msg, "not found");
                    (StatusCode::NOT_FOUND, msg)
                }
                ServiceError::Conflict(msg) => (StatusCode::CONFLICT, msg),
                ServiceError::Unavailable(msg) => {
                    tracing::warn!(%msg, "write refused during shutdown");
                    (StatusCode::SERVICE_UNAVAILABLE, msg)
                }
                ServiceError::Internal(msg) => {
                    tracing::error!(%msg, "request failed");
                    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
                }
            },
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
