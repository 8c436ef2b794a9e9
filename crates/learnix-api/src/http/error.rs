//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use learnix_types::error::SessionError;
use learnix_types::llm::GenerationError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Session lookup errors.
    Session(SessionError),
    /// Model backend failures.
    Generation(GenerationError),
    /// Unknown advice topic.
    AdviceNotFound(String),
    /// Validation error.
    Validation(String),
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        AppError::Session(e)
    }
}

impl From<GenerationError> for AppError {
    fn from(e: GenerationError) -> Self {
        AppError::Generation(e)
    }
}

impl AppError {
    /// HTTP status and machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Session(SessionError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "SESSION_NOT_FOUND")
            }
            AppError::Session(SessionError::InvalidId(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            AppError::Generation(
                GenerationError::AuthenticationFailed | GenerationError::Unavailable(_),
            ) => (StatusCode::SERVICE_UNAVAILABLE, "PROVIDER_UNAVAILABLE"),
            AppError::Generation(GenerationError::RateLimited { .. }) => {
                (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED")
            }
            AppError::Generation(_) => (StatusCode::BAD_GATEWAY, "GENERATION_FAILED"),
            AppError::AdviceNotFound(_) => (StatusCode::NOT_FOUND, "ADVICE_NOT_FOUND"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Session(e) => e.to_string(),
            AppError::Generation(e) => e.to_string(),
            AppError::AdviceNotFound(msg) | AppError::Validation(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::warn!(code, error = %message, "Request failed");
        }

        let body = json!({
            "data": null,
            "meta": {
                "request_id": "",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "response_time_ms": 0
            },
            "errors": [{
                "code": code,
                "message": message,
            }]
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_session_not_found_is_404() {
        let err = AppError::from(SessionError::NotFound(Uuid::nil()));
        assert_eq!(
            err.status_and_code(),
            (StatusCode::NOT_FOUND, "SESSION_NOT_FOUND")
        );
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_id_is_400() {
        let err = AppError::from(SessionError::InvalidId("nope".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_generation_errors() {
        let err = AppError::from(GenerationError::Provider {
            message: "boom".to_string(),
        });
        assert_eq!(
            err.status_and_code(),
            (StatusCode::BAD_GATEWAY, "GENERATION_FAILED")
        );

        let err = AppError::from(GenerationError::Unavailable("loading".to_string()));
        assert_eq!(
            err.status_and_code(),
            (StatusCode::SERVICE_UNAVAILABLE, "PROVIDER_UNAVAILABLE")
        );

        let err = AppError::from(GenerationError::AuthenticationFailed);
        assert_eq!(err.status_and_code().0, StatusCode::SERVICE_UNAVAILABLE);

        let err = AppError::from(GenerationError::RateLimited {
            retry_after_ms: None,
        });
        assert_eq!(err.status_and_code().0, StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_advice_not_found_is_404() {
        let err = AppError::AdviceNotFound("unknown advice topic: 'x'".to_string());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
