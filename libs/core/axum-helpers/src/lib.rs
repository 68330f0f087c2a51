//! # Axum Helpers
//!
//! Shared HTTP plumbing for the catalog services.
//!
//! ## Modules
//!
//! - **[`auth`]**: shared security key check, JWT issuing and bearer middleware
//! - **[`server`]**: router setup with API docs, health check, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`errors`]**: `AppError` and the error codes it logs with
//! - **[`extractors`]**: numeric id path and validated JSON extractors
//! - **[`response`]**: the `{success, data, errors}` envelope, notifications
//!   and the helpers that turn service results into responses
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let router = create_router::<ApiDoc>(Router::new(), &config)?;
//!     create_app(router, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod response;
pub mod server;

// Re-export auth types
pub use auth::{AccessToken, AuthConfig, AuthError, TokenClaims, TokenIssuer, require_bearer};

// Re-export server types
pub use server::{
    HealthResponse, ShutdownCoordinator, create_app, create_router, health_router,
    shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{create_cors_layer, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorCode};

// Re-export extractors
pub use extractors::{IdPath, ValidatedJson};

// Re-export response helpers
pub use response::{
    ApiResponse, Notification, Notifications, created_response, custom_response,
    status_response,
};
