use super::ErrorCode;
use crate::response::error_envelope;
use axum::{http::StatusCode, response::Response};
use std::any::Any;

/// Fallback handler for unknown routes.
pub async fn not_found() -> Response {
    error_envelope(
        StatusCode::NOT_FOUND,
        vec![ErrorCode::NotFound.default_message().to_string()],
    )
}

/// Turns a handler panic into a 500 envelope.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        ErrorCode::Panic.default_message().to_string()
    };

    tracing::error!(error_code = ErrorCode::Panic.code(), "Handler panicked: {}", message);

    error_envelope(StatusCode::INTERNAL_SERVER_ERROR, vec![message])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_status() {
        assert_eq!(not_found().await.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_panic_response_extracts_message() {
        let response = panic_response(Box::new("kaboom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = panic_response(Box::new(42u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
