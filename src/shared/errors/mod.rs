//! Error Types
//!
//! Layered error types with HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::infrastructure::driving_adapters::api_rest::middleware::current_request_id;

/// Domain-level errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Domain(_) | Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(DomainError::PasswordHash(_)) => "PASSWORD_HASH_ERROR",
            Self::Repository(_) => "INTERNAL_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Request body exceeds the {limit} byte limit")]
    PayloadTooLarge { limit: usize },

    #[error("Unsupported content type: {0}")]
    UnsupportedMediaType(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UseCase(uc_error) => uc_error.status_code(),
            Self::Validation(_) | Self::BadRequest(_) | Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Server-side failures are logged in full and answered generically
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        }

        let (code, message, details) = match self {
            ApiError::UseCase(uc_error) => (
                uc_error.error_code().to_string(),
                "An unexpected error occurred".to_string(),
                None,
            ),
            ApiError::Validation(fields) => (
                "VALIDATION_ERROR".to_string(),
                "Validation failed".to_string(),
                Some(fields),
            ),
            ApiError::BadRequest(msg) => ("BAD_REQUEST".to_string(), msg, None),
            ApiError::InvalidId(msg) => ("INVALID_ID".to_string(), msg, None),
            err @ ApiError::PayloadTooLarge { .. } => ("PAYLOAD_TOO_LARGE".to_string(), err.to_string(), None),
            err @ ApiError::UnsupportedMediaType(_) => {
                ("UNSUPPORTED_MEDIA_TYPE".to_string(), err.to_string(), None)
            }
            ApiError::Internal(_) => (
                "INTERNAL_ERROR".to_string(),
                "An unexpected error occurred".to_string(),
                None,
            ),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code,
                message,
                details,
            },
            request_id: current_request_id(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<std::num::ParseIntError> for ApiError {
    fn from(err: std::num::ParseIntError) -> Self {
        ApiError::InvalidId(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| FieldError {
                    field: (*field).to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map_or_else(|| format!("{field} is invalid"), ToString::to_string),
                })
            })
            .collect();
        // field_errors() is backed by a HashMap; keep the response stable
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        ApiError::Validation(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "username should not be empty"))]
        username: String,
        #[validate(length(min = 1))]
        password: String,
    }

    #[test]
    fn test_validation_errors_list_each_field() {
        let sample = Sample {
            username: String::new(),
            password: String::new(),
        };
        let ApiError::Validation(fields) = ApiError::from(sample.validate().unwrap_err()) else {
            panic!("expected validation error");
        };

        assert_eq!(
            fields,
            vec![
                FieldError {
                    field: "password".to_string(),
                    message: "password is invalid".to_string(),
                },
                FieldError {
                    field: "username".to_string(),
                    message: "username should not be empty".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::Validation(vec![]).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidId("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::PayloadTooLarge { limit: 1 }.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ApiError::UnsupportedMediaType("text/plain".into()).status_code(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            ApiError::from(UseCaseError::Repository(RepositoryError::Database(sqlx::Error::PoolTimedOut))).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_repository_error_body_does_not_leak_details() {
        let error = ApiError::from(UseCaseError::Repository(RepositoryError::Database(
            sqlx::Error::ColumnNotFound("password".into()),
        )));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"]["message"], "An unexpected error occurred");
        assert!(!body.windows(8).any(|w| w == b"password"));
    }

    #[test]
    fn test_parse_int_error_maps_to_invalid_id() {
        let err = "abc".parse::<i64>().unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::InvalidId(_)));
    }
}
