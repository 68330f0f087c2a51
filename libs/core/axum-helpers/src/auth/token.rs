use super::config::AuthConfig;
use crate::errors::AppError;
use crate::response::Notifications;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use subtle::ConstantTimeEq;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

/// Header carrying the shared secret on the token endpoint.
pub const SECURITY_KEY_HEADER: &str = "x-security-key";

/// `tokenType` reported to clients.
pub const TOKEN_TYPE: &str = "Bearer";

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // Subject (the issuing service)
    pub iss: String, // Issuer
    pub aud: String, // Audience
    pub iat: i64,    // Issued at
    pub nbf: i64,    // Not before
    pub exp: i64,    // Expiration time
    pub jti: String, // Unique token id, keeps consecutive tokens distinct
}

/// Token returned by `POST /api/v1/auth/token`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    /// Signed JWT
    pub access_token: String,
    /// Always "Bearer"
    pub token_type: String,
    /// Lifetime in seconds
    pub expires_in: i64,
    /// Issue timestamp
    pub created: DateTime<Utc>,
    /// Expiry timestamp
    pub expires: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Security key is required")]
    MissingKey,

    #[error("Invalid security key")]
    InvalidKey,

    #[error("Bearer token is required")]
    MissingToken,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Failed to issue token: {0}")]
    Issue(String),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingKey => AppError::PreconditionFailed(err.to_string()),
            AuthError::InvalidKey | AuthError::MissingToken | AuthError::InvalidToken(_) => {
                AppError::Unauthorized(err.to_string())
            }
            AuthError::Issue(_) => AppError::internal(err.to_string(), Notifications::new()),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

struct Keys {
    config: AuthConfig,
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

/// Checks the shared security key and mints / validates HMAC-SHA256 tokens.
///
/// Stateless: tokens are never stored, so validation is purely signature,
/// issuer, audience and time window, with no clock-skew allowance.
#[derive(Clone)]
pub struct TokenIssuer {
    keys: Arc<Keys>,
}

impl TokenIssuer {
    pub fn new(config: AuthConfig) -> Self {
        let secret = config.security_key.as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.sender.as_str()]);
        validation.set_audience(&[config.valid_on.as_str()]);
        validation.set_required_spec_claims(&["exp", "nbf", "iss", "aud"]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        tracing::info!(
            issuer = %config.sender,
            audience = %config.valid_on,
            expiration_minutes = config.expiration_minutes,
            "Token issuer initialized"
        );

        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
                validation,
                config,
            }),
        }
    }

    /// Check the `X-Security-Key` value.
    ///
    /// Missing, empty or whitespace-only → [`AuthError::MissingKey`]; anything
    /// not byte-for-byte equal to the configured key → [`AuthError::InvalidKey`].
    pub fn authenticate(&self, provided: Option<&str>) -> Result<(), AuthError> {
        let provided = match provided {
            Some(value) if !value.trim().is_empty() => value,
            _ => return Err(AuthError::MissingKey),
        };

        let expected = self.keys.config.security_key.as_bytes();
        if bool::from(provided.as_bytes().ct_eq(expected)) {
            Ok(())
        } else {
            Err(AuthError::InvalidKey)
        }
    }

    /// Mint a fresh token valid from now for the configured lifetime.
    pub fn issue(&self) -> Result<AccessToken, AuthError> {
        let config = &self.keys.config;
        let created = Utc::now();
        let expires = created + Duration::minutes(i64::from(config.expiration_minutes));

        let claims = TokenClaims {
            sub: config.sender.clone(),
            iss: config.sender.clone(),
            aud: config.valid_on.clone(),
            iat: created.timestamp(),
            nbf: created.timestamp(),
            exp: expires.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(|e| AuthError::Issue(e.to_string()))?;

        tracing::debug!(jti = %claims.jti, "Issued access token");

        Ok(AccessToken {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: (expires - created).num_seconds(),
            created,
            expires,
        })
    }

    /// Verify signature, issuer, audience and the `nbf`/`exp` window.
    pub fn validate(&self, token: &str) -> Result<TokenClaims, AuthError> {
        decode::<TokenClaims>(token, &self.keys.decoding, &self.keys.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
