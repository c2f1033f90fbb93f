//! # API Errors
//!
//! Error types for the HTTP surface. Every variant maps to exactly one
//! status code and serializes to the same JSON body shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors a request can surface. All of them are terminal for the
/// request and leave the store untouched.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// A required field is missing or empty, or a parameter is outside
    /// its allow-list.
    #[error("{message}")]
    Validation { field: String, message: String },

    /// No ticket under the requested id.
    #[error("No help ticket with ID: {0}")]
    NotFound(String),

    /// Store-side failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Validation failure for a missing or empty required field.
    pub fn required(field: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: format!("'{}' is a required value", field),
        }
    }

    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    pub code: u16,
}

impl From<ApiError> for ErrorBody {
    fn from(err: ApiError) -> Self {
        let field = match &err {
            ApiError::Validation { field, .. } => Some(field.clone()),
            _ => None,
        };

        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
            field,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorBody::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::required("name").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_required_message() {
        let err = ApiError::required("review");

        assert_eq!(err.to_string(), "'review' is a required value");
    }

    #[test]
    fn test_not_found_message_names_id() {
        let err = ApiError::NotFound("doesnotexist".to_string());

        assert_eq!(err.to_string(), "No help ticket with ID: doesnotexist");
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody::from(ApiError::required("author"));
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["error"], "'author' is a required value");
        assert_eq!(value["field"], "author");
        assert_eq!(value["code"], 400);
    }

    #[test]
    fn test_error_body_omits_field_when_absent() {
        let body = ErrorBody::from(ApiError::NotFound("ab12cd".to_string()));
        let value = serde_json::to_value(&body).unwrap();

        assert!(value.get("field").is_none());
        assert_eq!(value["code"], 404);
    }

    #[test]
    fn test_store_error_maps_to_internal() {
        let err = ApiError::from(StoreError::LockPoisoned);

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("lock poisoned"));
    }
}
