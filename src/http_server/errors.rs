//! # HTTP API Errors
//!
//! Store failures become 500 with a generic body; the cause is logged, not
//! returned to the client. Missing products become 404.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Product API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// No product with the requested id
    #[error("Product not found")]
    ProductNotFound,

    /// Listing products failed in the store
    #[error("Failed to fetch products")]
    ListFailed(#[source] StoreError),

    /// Fetching a single product failed in the store
    #[error("Failed to fetch product")]
    FetchFailed(#[source] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ProductNotFound => StatusCode::NOT_FOUND,
            ApiError::ListFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::FetchFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn store_error(&self) -> Option<&StoreError> {
        match self {
            ApiError::ListFailed(e) | ApiError::FetchFailed(e) => Some(e),
            ApiError::ProductNotFound => None,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let Some(cause) = self.store_error() {
            error!(code = cause.code().code(), error = %cause, "{}", self);
        }
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn corrupt() -> StoreError {
        StoreError::data_corruption(Path::new("products.json"), "bad")
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::ProductNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::ListFailed(corrupt()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::FetchFailed(corrupt()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message_does_not_leak_cause() {
        let err = ApiError::ListFailed(corrupt());
        assert_eq!(err.to_string(), "Failed to fetch products");
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::ProductNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
