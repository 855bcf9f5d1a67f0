//! Unified API error handling
//!
//! This module provides a consistent error response format across all API endpoints.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::service::bias::BiasAnalysisError;

/// Standard error response format
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
///
/// All API endpoints should return `Result<T, ApiError>` for consistent error handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Bad request / validation error (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Request body over the configured limit (413)
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// External service error (502)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// External service did not answer in time (504)
    #[error("External service timed out: {0}")]
    UpstreamTimeout(String),
}

impl ApiError {
    fn error_type(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::PayloadTooLarge(_) => "payload_too_large",
            ApiError::Internal(_) => "internal_error",
            ApiError::ExternalService(_) => "external_service_error",
            ApiError::UpstreamTimeout(_) => "upstream_timeout",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::ExternalService(_) => StatusCode::BAD_GATEWAY,
            ApiError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = self.error_type();

        tracing::error!(
            error_type = error_type,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

impl From<BiasAnalysisError> for ApiError {
    fn from(err: BiasAnalysisError) -> Self {
        match err {
            BiasAnalysisError::Payload(_) => ApiError::Internal(err.to_string()),
            BiasAnalysisError::Timeout(_) => ApiError::UpstreamTimeout(err.to_string()),
            _ => ApiError::ExternalService(err.to_string()),
        }
    }
}

/// Map request body extraction failures onto [`ApiError`]
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            ApiError::PayloadTooLarge(err.to_string()).into()
        }
        _ => ApiError::BadRequest(err.to_string()).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                BiasAnalysisError::Transport("refused".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (BiasAnalysisError::Timeout(30), StatusCode::GATEWAY_TIMEOUT),
            (
                BiasAnalysisError::UnexpectedShape("{}".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                BiasAnalysisError::IndexOutOfRange { index: 9, len: 1 },
                StatusCode::BAD_GATEWAY,
            ),
            (
                BiasAnalysisError::Payload("bad".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status_code(), status);
        }
    }

    #[test]
    fn test_json_overflow_is_payload_too_large() {
        let req = actix_web::test::TestRequest::default().to_http_request();

        let err = json_error_handler(
            JsonPayloadError::OverflowKnownLength {
                length: 4096,
                limit: 64,
            },
            &req,
        );
        assert_eq!(
            err.as_response_error().status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );

        let err = json_error_handler(JsonPayloadError::ContentType, &req);
        assert_eq!(err.as_response_error().status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_message_keeps_raw_output() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ApiError::from(BiasAnalysisError::MalformedResponse {
            raw: "not json".to_string(),
            source,
        });

        assert!(err.to_string().contains("not json"));
    }
}
