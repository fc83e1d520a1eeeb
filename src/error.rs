//! Application error type and its HTTP rendering.
//!
//! Every failure leaving a handler is an [`AppError`]. Responses share one body shape:
//!
//! ```json
//! { "error": { "code": "internal_error", "message": "Database error", "details": {} } }
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Error returned by handlers and services.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed request (400).
    #[error("{message}")]
    Validation { message: String, details: Value },
    /// No record under the requested identifier (404).
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// Request body over the size limit (413).
    #[error("{message}")]
    PayloadTooLarge { message: String, details: Value },
    /// Request body sent without a JSON content type (415).
    #[error("{message}")]
    UnsupportedMediaType { message: String, details: Value },
    /// Store or other server-side failure (500).
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    /// Builds a [`AppError::Validation`].
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    /// Builds a [`AppError::NotFound`].
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    /// Builds a [`AppError::PayloadTooLarge`].
    pub fn payload_too_large(message: impl Into<String>, details: Value) -> Self {
        Self::PayloadTooLarge {
            message: message.into(),
            details,
        }
    }

    /// Builds a [`AppError::UnsupportedMediaType`].
    pub fn unsupported_media_type(message: impl Into<String>, details: Value) -> Self {
        Self::UnsupportedMediaType {
            message: message.into(),
            details,
        }
    }

    /// Builds a [`AppError::Internal`].
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status the error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::PayloadTooLarge { message, details } => {
                ("payload_too_large", message, details)
            }
            AppError::UnsupportedMediaType { message, details } => {
                ("unsupported_media_type", message, details)
            }
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Document store query failed");
        AppError::internal("Database error", json!({}))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let reason = rejection.body_text();
        let details = json!({ "reason": reason });

        match rejection {
            JsonRejection::MissingJsonContentType(_) => AppError::unsupported_media_type(
                "Expected request with `Content-Type: application/json`",
                details,
            ),
            JsonRejection::BytesRejection(ref inner)
                if inner.status() == StatusCode::PAYLOAD_TOO_LARGE =>
            {
                AppError::payload_too_large("Request body is too large", details)
            }
            JsonRejection::BytesRejection(_) => {
                AppError::bad_request("Failed to read request body", details)
            }
            _ => AppError::bad_request("Request body must be a JSON object", details),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(
            "Invalid query string",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("bad", json!({})).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("gone", json!({})).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::payload_too_large("big", json!({})).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            AppError::unsupported_media_type("nope", json!({})).status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            AppError::internal("boom", json!({})).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_info_codes() {
        let info = AppError::internal("Database error", json!({ "attempts": 5 })).to_error_info();
        assert_eq!(info.code, "internal_error");
        assert_eq!(info.message, "Database error");
        assert_eq!(info.details["attempts"], 5);

        let info = AppError::bad_request("bad body", json!({})).to_error_info();
        assert_eq!(info.code, "validation_error");

        let info = AppError::payload_too_large("big", json!({})).to_error_info();
        assert_eq!(info.code, "payload_too_large");
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::internal("Store unreachable", json!({}));
        assert_eq!(err.to_string(), "Store unreachable");
    }

    #[test]
    fn test_sqlx_error_maps_to_internal() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
