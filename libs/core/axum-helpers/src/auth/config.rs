//! Token issuer configuration.

use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or, env_required};

/// Minimum length of the shared security key.
pub const MIN_SECURITY_KEY_LEN: usize = 32;

/// Authentication configuration.
///
/// Loaded from environment variables:
/// - `AUTH_SECURITY_KEY` (required): shared secret expected in `X-Security-Key`,
///   also used as the HMAC signing key. At least 32 characters.
/// - `AUTH_EXPIRATION_MINUTES` (default `60`): token lifetime, must be positive
/// - `AUTH_SENDER` (default `catalog-api`): token issuer (`iss`)
/// - `AUTH_VALID_ON` (default `http://localhost`): token audience (`aud`)
#[derive(Clone)]
pub struct AuthConfig {
    pub security_key: String,
    pub expiration_minutes: u32,
    pub sender: String,
    pub valid_on: String,
}

impl AuthConfig {
    /// Build a configuration, enforcing the same rules as [`FromEnv`].
    pub fn new(
        security_key: impl Into<String>,
        expiration_minutes: u32,
        sender: impl Into<String>,
        valid_on: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            security_key: security_key.into(),
            expiration_minutes,
            sender: sender.into(),
            valid_on: valid_on.into(),
        };
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.security_key.len() < MIN_SECURITY_KEY_LEN {
            return Err(ConfigError::ParseError {
                key: "AUTH_SECURITY_KEY".to_string(),
                details: format!(
                    "must be at least {} characters (got {}). Generate one with: openssl rand -base64 32",
                    MIN_SECURITY_KEY_LEN,
                    self.security_key.len()
                ),
            });
        }

        if self.expiration_minutes == 0 {
            return Err(ConfigError::ParseError {
                key: "AUTH_EXPIRATION_MINUTES".to_string(),
                details: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("security_key", &"<redacted>")
            .field("expiration_minutes", &self.expiration_minutes)
            .field("sender", &self.sender)
            .field("valid_on", &self.valid_on)
            .finish()
    }
}

impl FromEnv for AuthConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            security_key: env_required("AUTH_SECURITY_KEY")?,
            expiration_minutes: env_parse_or("AUTH_EXPIRATION_MINUTES", 60)?,
            sender: env_or_default("AUTH_SENDER", "catalog-api"),
            valid_on: env_or_default("AUTH_VALID_ON", "http://localhost"),
        };
        config.check()?;
        Ok(config)
    }
}
