//! Error types and response handling for the API server.
//!
//! Maps store failures to HTTP status codes and renders the JSON error body
//! `{"error": {"type", "message", "request_id"}}`.

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::store::{CounterId, StoreError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Counter {id} not found")]
    NotFound { id: CounterId },

    /// Malformed path or query parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Well-formed request the store refused (overflow, broken reference).
    #[error("Unprocessable request: {0}")]
    Unprocessable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::CounterNotFound { id } => ApiError::NotFound { id },
            StoreError::Overflow { .. }
            | StoreError::Invalid { .. }
            | StoreError::GroupNotFound { .. } => ApiError::Unprocessable(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "not_found",
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::Unprocessable(_) => "unprocessable",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

/// Builder for standardized error responses
pub struct ErrorResponse;

impl ErrorResponse {
    pub fn from_error(err: &ApiError, request_id: &str) -> Response {
        let body = serde_json::json!({
            "error": {
                "type": err.error_type(),
                "message": err.to_string(),
                "request_id": request_id
            }
        });

        let mut response = (err.status_code(), body.to_string()).into_response();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/json"),
        );
        response
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let request_id = uuid::Uuid::new_v4().to_string();
        if self.status_code().is_server_error() {
            tracing::error!(%request_id, error = %self, "Request failed");
        } else {
            tracing::warn!(%request_id, error = %self, "Request rejected");
        }
        ErrorResponse::from_error(&self, &request_id)
    }
}

/// Plain 404 for paths outside the API.
pub async fn route_not_found() -> Response {
    let body = serde_json::json!({
        "error": { "type": "not_found", "message": "No such route" }
    });
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|_| StatusCode::NOT_FOUND.into_response())
}
