use axum::{Router, extract::State, http::StatusCode, response::Response, routing::get};
use axum_helpers::{
    AppError, IdPath, Notifications, ValidatedJson, created_response, custom_response,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
        PreconditionFailedResponse, UnauthorizedResponse,
    },
    status_response,
};
use utoipa::OpenApi;

use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub const TAG: &str = "products";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        update_product,
        get_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductInput),
        responses(
            BadRequestResponse,
            PreconditionFailedResponse,
            NotFoundResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new()
        .route(
            "/",
            get(list_products::<R>)
                .post(create_product::<R>)
                .put(update_product::<R>),
        )
        .route(
            "/{id}",
            get(get_product::<R>).delete(delete_product::<R>),
        )
        .with_state(service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All products", body = inline(axum_helpers::ApiResponse<Vec<Product>>)),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<ProductService<R>>,
) -> Result<Response, AppError> {
    let products = service.get_all().await?;
    Ok(custom_response(Some(products), &Notifications::new()))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    security(("bearer_auth" = [])),
    params(
        ("id" = u64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = inline(axum_helpers::ApiResponse<Product>)),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    IdPath(id): IdPath,
) -> Result<Response, AppError> {
    let mut notes = Notifications::new();
    let result = service.get_by_id(id, &mut notes).await;

    match result {
        Ok(product) => Ok(custom_response(product, &notes)),
        Err(e) => Err(e.into_app_error(notes)),
    }
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    security(("bearer_auth" = [])),
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = inline(axum_helpers::ApiResponse<Product>)),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 412, response = PreconditionFailedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> Result<Response, AppError> {
    let mut notes = Notifications::new();
    let result = service.create(input, &mut notes).await;

    match result {
        Ok(product) => Ok(created_response(product, &notes)),
        Err(e) => Err(e.into_app_error(notes)),
    }
}

/// Replace an existing product, selected by the `id` in the body
#[utoipa::path(
    put,
    path = "",
    tag = TAG,
    security(("bearer_auth" = [])),
    request_body = ProductInput,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 412, response = PreconditionFailedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> Result<Response, AppError> {
    let mut notes = Notifications::new();
    let result = service.update(input, &mut notes).await;

    match result {
        Ok(updated) => Ok(status_response(updated, &notes, StatusCode::NO_CONTENT)),
        Err(e) => Err(e.into_app_error(notes)),
    }
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    security(("bearer_auth" = [])),
    params(
        ("id" = u64, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    IdPath(id): IdPath,
) -> Result<Response, AppError> {
    let mut notes = Notifications::new();
    let result = service.delete_by_id(id, &mut notes).await;

    match result {
        Ok(deleted) => Ok(status_response(deleted, &notes, StatusCode::NO_CONTENT)),
        Err(e) => Err(e.into_app_error(notes)),
    }
}
