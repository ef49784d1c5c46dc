use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    BadRequest(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::EmptyExport) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = match &self {
            Self::Storage(StorageError::NotFound) => {
                json!({
                    "error": "Resource not found"
                })
            }
            Self::Storage(StorageError::EmptyExport) => {
                json!({
                    "error": "Nothing to export"
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "error": msg
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}
