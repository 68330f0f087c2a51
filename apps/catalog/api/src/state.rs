//! Application state management

use axum_helpers::TokenIssuer;
use domain_products::{InMemoryProductRepository, ProductService};
use domain_users::{InMemoryUserRepository, UserService};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub issuer: TokenIssuer,
    pub products: ProductService<InMemoryProductRepository>,
    pub users: UserService<InMemoryUserRepository>,
}

impl AppState {
    /// Empty stores, token issuer built from `config.auth`.
    pub fn new(config: Config) -> Self {
        Self {
            issuer: TokenIssuer::new(config.auth.clone()),
            products: ProductService::new(InMemoryProductRepository::new()),
            users: UserService::new(InMemoryUserRepository::new()),
            config,
        }
    }
}
