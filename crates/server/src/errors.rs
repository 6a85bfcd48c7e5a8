use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error body: `{ "error": "...", "detail": "..." }`.
#[derive(Debug, Serialize)]
pub struct JsonApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &str, detail: Option<String>) -> Self {
        Self { status, error: error.to_string(), detail }
    }

    pub fn not_found(what: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(format!("{} not found", what)))
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            e if e.is_validation() => Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string())),
            e => {
                error!(err = %e, "store operation failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Error", Some(e.to_string()))
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("migration failed: {0}")]
    Migration(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
