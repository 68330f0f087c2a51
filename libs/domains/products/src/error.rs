use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, Notifications};
use thiserror::Error;

/// Faults of the storage backend.
///
/// Business-rule failures (duplicates, unknown ids) are not errors; the
/// service records them in [`Notifications`] instead.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    /// 500 response listing what was recorded before the fault.
    pub fn into_app_error(self, notifications: Notifications) -> AppError {
        AppError::internal(self.to_string(), notifications)
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        err.into_app_error(Notifications::new())
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
