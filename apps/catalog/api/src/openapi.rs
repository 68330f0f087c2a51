//! OpenAPI documentation configuration

use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Registers the bearer token and security key schemes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token from POST /api/v1/auth/token"))
                    .build(),
            ),
        );
        components.add_security_scheme(
            "security_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "X-Security-Key",
                "Shared secret exchanged for a bearer token.",
            ))),
        );
    }
}

/// Combined OpenAPI documentation for Catalog API
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Products and users CRUD behind shared-key / JWT authentication"
    ),
    paths(crate::api::auth::issue_token),
    components(schemas(axum_helpers::AccessToken, axum_helpers::response::ErrorEnvelope)),
    nest(
        (path = "/api/v1/products", api = domain_products::ApiDoc),
        (path = "/api/v1/users", api = domain_users::ApiDoc)
    ),
    tags(
        (name = crate::api::auth::TAG, description = "Token issuing")
    )
)]
pub struct ApiDoc;
