//! Auth fixtures shared by handler and end-to-end tests.

use axum_helpers::{AuthConfig, TokenIssuer};

/// Security key accepted by [`issuer`].
pub const TEST_SECURITY_KEY: &str = "test-security-key-with-at-least-32-chars";
pub const TEST_SENDER: &str = "catalog-tests";
pub const TEST_VALID_ON: &str = "http://localhost";

pub fn config() -> AuthConfig {
    config_with_expiration(60)
}

pub fn config_with_expiration(minutes: u32) -> AuthConfig {
    AuthConfig::new(TEST_SECURITY_KEY, minutes, TEST_SENDER, TEST_VALID_ON)
        .unwrap_or_else(|e| panic!("test auth config rejected: {}", e))
}

pub fn issuer() -> TokenIssuer {
    TokenIssuer::new(config())
}

/// `Authorization` header value carrying a fresh token from `issuer`.
pub fn bearer(issuer: &TokenIssuer) -> String {
    let token = issuer
        .issue()
        .unwrap_or_else(|e| panic!("failed to issue test token: {}", e));
    format!("Bearer {}", token.access_token)
}
