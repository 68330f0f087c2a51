pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use crate::response::{Notifications, error_envelope};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

/// Keywords that mark a validation message as a data-annotation or
/// business-rule violation (412) rather than a binding problem (400).
const PRECONDITION_KEYWORDS: [&str; 3] = ["required", "must be", "range"];

/// Application error type that can be converted to HTTP responses.
///
/// Every variant renders the `{success: false, data: null, errors}` envelope
/// and logs with a structured [`ErrorCode`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Precondition Failed: {0}")]
    PreconditionFailed(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    /// Unexpected failure. The envelope lists the notifications recorded
    /// before the failure followed by `message`.
    #[error("Internal Server Error: {message}")]
    Internal {
        message: String,
        notifications: Notifications,
    },
}

impl AppError {
    pub fn internal(message: impl Into<String>, notifications: Notifications) -> Self {
        AppError::Internal {
            message: message.into(),
            notifications,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, errors) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                (StatusCode::BAD_REQUEST, vec![e.body_text()])
            }
            AppError::ValidationError(e) => {
                let messages = validation_messages(&e);
                let status = validation_status(&messages);
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    status = status.as_u16(),
                    "Validation error: {:?}",
                    messages
                );
                (status, messages)
            }
            AppError::InvalidId(raw) => {
                tracing::info!(error_code = ErrorCode::InvalidId.code(), "Invalid id: {}", raw);
                (StatusCode::BAD_REQUEST, vec![format!("Invalid id: {}", raw)])
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::BusinessRule.code(), "Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, vec![msg])
            }
            AppError::Unauthorized(msg) => {
                tracing::info!(
                    error_code = ErrorCode::Unauthorized.code(),
                    "Unauthorized: {}",
                    msg
                );
                (StatusCode::UNAUTHORIZED, vec![msg])
            }
            AppError::PreconditionFailed(msg) => {
                tracing::info!(
                    error_code = ErrorCode::PreconditionFailed.code(),
                    "Precondition failed: {}",
                    msg
                );
                (StatusCode::PRECONDITION_FAILED, vec![msg])
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, vec![msg])
            }
            AppError::Internal {
                message,
                notifications,
            } => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    notifications = ?notifications.messages(),
                    "Internal server error: {}",
                    message
                );
                let mut errors = notifications.into_messages();
                errors.push(message);
                (StatusCode::INTERNAL_SERVER_ERROR, errors)
            }
        };

        error_envelope(status, errors)
    }
}

/// Flatten validator errors into messages, ordered by field name.
///
/// Errors without a custom message fall back to `"<field> is invalid (<code>)"`.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid ({})", field, err.code),
            })
        })
        .collect()
}

/// Whether a message reads like a data-annotation or business-rule violation.
pub fn is_precondition_message(message: &str) -> bool {
    let lowered = message.to_lowercase();
    PRECONDITION_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// 412 when any message is a precondition violation, 400 otherwise.
pub fn validation_status(messages: &[String]) -> StatusCode {
    if messages.iter().any(|m| is_precondition_message(m)) {
        StatusCode::PRECONDITION_FAILED
    } else {
        StatusCode::BAD_REQUEST
    }
}
