//! HTTP error mapping
//!
//! Every failure leaves the API as `{"detail": "..."}` with 400, 404 or 500.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use prompthub::DomainError;

/// Error body returned for every non-2xx response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message. 500s embed the upstream error text.
    pub detail: String,
}

/// Application-level error type that converts to an HTTP response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Map a domain error, prefixing 500 details with the failed operation.
    pub fn from_domain(err: DomainError, operation: &str) -> Self {
        match err {
            DomainError::NotFound { entity_type, .. } => {
                ApiError::NotFound(format!("{} not found", entity_type))
            }
            DomainError::Validation(msg) => ApiError::BadRequest(msg),
            DomainError::Repository(msg) => {
                ApiError::Internal(format!("Failed to {}: {}", operation, msg))
            }
        }
    }

    /// `map_err` adapter carrying the operation name
    pub fn context(operation: &'static str) -> impl Fn(DomainError) -> ApiError {
        move |err| ApiError::from_domain(err, operation)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Internal error: {}", self);
        }

        (
            status,
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_statuses() {
        let err = ApiError::from_domain(DomainError::not_found("Prompt", "abc"), "get prompt");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Prompt not found");

        let err = ApiError::from_domain(
            DomainError::Validation("Nothing to update".to_string()),
            "update prompt",
        );
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Nothing to update");
    }

    #[test]
    fn test_repository_error_keeps_upstream_text() {
        let err = ApiError::from_domain(
            DomainError::Repository("connection reset".to_string()),
            "list prompts",
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to list prompts: connection reset");
    }
}
