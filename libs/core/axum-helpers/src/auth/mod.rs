//! Shared-key authentication and bearer tokens.
//!
//! This module provides:
//! - [`AuthConfig`] loaded from `AUTH_*` environment variables
//! - [`TokenIssuer`] which checks the `X-Security-Key` header and mints
//!   HMAC-SHA256 JWTs
//! - [`require_bearer`] middleware for protected routes
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{AuthConfig, TokenIssuer, require_bearer};
//! use core_config::FromEnv;
//!
//! let issuer = TokenIssuer::new(AuthConfig::from_env()?);
//!
//! let protected = Router::new()
//!     .route("/api/v1/products", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(issuer, require_bearer));
//! ```

pub mod config;
pub mod middleware;
pub mod token;

pub use config::{AuthConfig, MIN_SECURITY_KEY_LEN};
pub use middleware::require_bearer;
pub use token::{AccessToken, AuthError, SECURITY_KEY_HEADER, TOKEN_TYPE, TokenClaims, TokenIssuer};
