//! API routes module

pub mod auth;

use axum::{Router, middleware};
use axum_helpers::require_bearer;

use crate::state::AppState;

/// Create all versioned API routes.
///
/// Everything except `/v1/auth/token` requires a bearer token.
pub fn routes(state: &AppState) -> Router {
    let protected = Router::new()
        .nest(
            "/products",
            domain_products::handlers::router(state.products.clone()),
        )
        .nest("/users", domain_users::handlers::router(state.users.clone()))
        .route_layer(middleware::from_fn_with_state(
            state.issuer.clone(),
            require_bearer,
        ));

    let v1 = Router::new()
        .nest("/auth", auth::router(state.issuer.clone()))
        .merge(protected);

    Router::new().nest("/v1", v1)
}
