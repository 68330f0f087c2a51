//! Catalog API - products and users over REST

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use std::io;

pub use config::Config;
pub use state::AppState;

/// Full application router: versioned API under `/api`, docs, `/health`.
pub fn build_router(state: &AppState) -> io::Result<Router> {
    let router = create_router::<openapi::ApiDoc>(api::routes(state), &state.config.server)?;
    Ok(router.merge(health_router(state.config.app)))
}
