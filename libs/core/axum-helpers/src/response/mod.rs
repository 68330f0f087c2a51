//! Response envelope, request-scoped notifications and the helpers that
//! combine them into HTTP responses.

pub mod envelope;
pub mod helpers;
pub mod notifications;

pub use envelope::{ApiResponse, ErrorEnvelope, error_envelope};
pub use helpers::{created_response, custom_response, status_response};
pub use notifications::{Notification, Notifications};
