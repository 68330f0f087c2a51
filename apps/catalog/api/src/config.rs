//! Configuration for Catalog API

use axum_helpers::AuthConfig;
use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub environment: Environment,
}

impl Config {
    /// Load everything from the environment. A missing or short
    /// `AUTH_SECURITY_KEY` is fatal.
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let auth = AuthConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            auth,
            environment,
        })
    }
}
