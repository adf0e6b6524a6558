//! HTTP error mapping
//!
//! Every failure leaves the server as `{ "error": <message>, "details":
//! <string list or null> }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::stats::StatsError;
use crate::store::StoreError;
use crate::validation::ValidationError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the catalog API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid data")]
    Validation(#[from] ValidationError),

    #[error("Item not found")]
    ItemNotFound,

    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error(transparent)]
    StatsUnavailable(#[from] StatsError),

    #[error("Route Not Found")]
    RouteNotFound,

    #[error("{0}")]
    MalformedBody(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::ItemNotFound => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::StatsUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body of the error response
    pub fn to_body(&self) -> ErrorResponse {
        let details = match self {
            ApiError::Validation(e) => Some(e.details.clone()),
            _ => None,
        };
        ErrorResponse {
            error: self.to_string(),
            details,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(self.to_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::ItemNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Validation(ValidationError::new(vec![])).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::StatsUnavailable(StatsError::LockPoisoned).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bodies() {
        let err = ApiError::from(ValidationError::new(vec!["Price must be a positive number".into()]));
        assert_eq!(
            err.to_body(),
            ErrorResponse {
                error: "Invalid data".into(),
                details: Some(vec!["Price must be a positive number".into()]),
            }
        );

        let body = serde_json::to_value(ApiError::RouteNotFound.to_body()).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Route Not Found", "details": null}));

        let err = ApiError::from(StoreError::Corrupt("expected value".into()));
        assert_eq!(
            err.to_body().error,
            "Data file is not a valid item collection: expected value"
        );

        let err = ApiError::from(StatsError::LockPoisoned);
        assert_eq!(err.to_body().error, "Could not calculate statistics");
    }
}
