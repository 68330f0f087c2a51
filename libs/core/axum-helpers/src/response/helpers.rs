//! Response builders shared by every handler.
//!
//! Each helper takes the handler's result together with the request's
//! [`Notifications`] and decides the status code and envelope.

use super::envelope::{ApiResponse, error_envelope};
use super::notifications::Notifications;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Standard read response.
///
/// - `None` → 404 with the recorded errors
/// - notifications present → 400
/// - otherwise → 200 `{success: true, data}`
pub fn custom_response<T: Serialize>(result: Option<T>, notifications: &Notifications) -> Response {
    match result {
        None => error_envelope(StatusCode::NOT_FOUND, notifications.messages()),
        Some(_) if notifications.has_errors() => {
            error_envelope(StatusCode::BAD_REQUEST, notifications.messages())
        }
        Some(data) => ApiResponse::ok(data).with_status(StatusCode::OK),
    }
}

/// Creation response: 201 on success, 400 when nothing was created or a
/// business rule was recorded.
pub fn created_response<T: Serialize>(
    result: Option<T>,
    notifications: &Notifications,
) -> Response {
    match result {
        Some(data) if !notifications.has_errors() => {
            ApiResponse::ok(data).with_status(StatusCode::CREATED)
        }
        _ => error_envelope(StatusCode::BAD_REQUEST, notifications.messages()),
    }
}

/// Response for operations that only report success.
///
/// On success the `requested` status is returned; `204 No Content` gets an
/// empty body, anything else an envelope with `data: null`. Failures are
/// remapped to 400.
pub fn status_response(
    succeeded: bool,
    notifications: &Notifications,
    requested: StatusCode,
) -> Response {
    if !succeeded || notifications.has_errors() {
        return error_envelope(StatusCode::BAD_REQUEST, notifications.messages());
    }

    if requested == StatusCode::NO_CONTENT {
        StatusCode::NO_CONTENT.into_response()
    } else {
        ApiResponse::<()> {
            success: true,
            data: None,
            errors: Vec::new(),
        }
        .with_status(requested)
    }
}
