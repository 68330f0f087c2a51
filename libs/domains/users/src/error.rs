use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, Notifications};
use thiserror::Error;

/// Faults of the storage backend. Rule violations go to [`Notifications`].
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    pub fn into_app_error(self, notifications: Notifications) -> AppError {
        AppError::internal(self.to_string(), notifications)
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        err.into_app_error(Notifications::new())
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
