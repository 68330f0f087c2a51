//! The uniform `{success, data, errors}` body returned by every endpoint.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response envelope.
///
/// `data` is always serialized (as `null` on failure) and `errors` is always
/// an array, so clients can branch on `success` alone.
///
/// # JSON Example
///
/// ```json
/// { "success": true, "data": { "id": 1, "name": "Widget", "weight": 3.12 }, "errors": [] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Payload on success, `null` otherwise
    pub data: Option<T>,
    /// Human-readable error messages, empty on success
    pub errors: Vec<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn failure(errors: Vec<String>) -> Self {
        Self {
            success: false,
            data: None,
            errors,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Render this envelope with the given status code.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Envelope shape used for failures in OpenAPI documentation.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always `false`
    pub success: bool,
    /// Always `null`
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
    /// Error messages
    pub errors: Vec<String>,
}

/// Shorthand for a failed envelope with `data: null`.
pub fn error_envelope(status: StatusCode, errors: Vec<String>) -> Response {
    ApiResponse::<()>::failure(errors).with_status(status)
}
