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

use crate::models::{User, UserInput};
use crate::repository::UserRepository;
use crate::service::UserService;

pub const TAG: &str = "users";

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, update_user, get_user, delete_user),
    components(
        schemas(User, UserInput),
        responses(
            BadRequestResponse,
            PreconditionFailedResponse,
            NotFoundResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the user router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    Router::new()
        .route(
            "/",
            get(list_users::<R>)
                .post(create_user::<R>)
                .put(update_user::<R>),
        )
        .route("/{id}", get(get_user::<R>).delete(delete_user::<R>))
        .with_state(service)
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users", body = inline(axum_helpers::ApiResponse<Vec<User>>)),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<UserService<R>>,
) -> Result<Response, AppError> {
    let users = service.get_all().await?;
    Ok(custom_response(Some(users), &Notifications::new()))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    security(("bearer_auth" = [])),
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = inline(axum_helpers::ApiResponse<User>)),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<UserService<R>>,
    IdPath(id): IdPath,
) -> Result<Response, AppError> {
    let mut notes = Notifications::new();
    let result = service.get_by_id(id, &mut notes).await;

    match result {
        Ok(user) => Ok(custom_response(user, &notes)),
        Err(e) => Err(e.into_app_error(notes)),
    }
}

/// Register a user
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    security(("bearer_auth" = [])),
    request_body = UserInput,
    responses(
        (status = 201, description = "User created", body = inline(axum_helpers::ApiResponse<User>)),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 412, response = PreconditionFailedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<UserService<R>>,
    ValidatedJson(input): ValidatedJson<UserInput>,
) -> Result<Response, AppError> {
    let mut notes = Notifications::new();
    let result = service.create(input, &mut notes).await;

    match result {
        Ok(user) => Ok(created_response(user, &notes)),
        Err(e) => Err(e.into_app_error(notes)),
    }
}

/// Replace a user, selected by the `id` in the body
#[utoipa::path(
    put,
    path = "",
    tag = TAG,
    security(("bearer_auth" = [])),
    request_body = UserInput,
    responses(
        (status = 204, description = "User updated"),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 412, response = PreconditionFailedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<UserService<R>>,
    ValidatedJson(input): ValidatedJson<UserInput>,
) -> Result<Response, AppError> {
    let mut notes = Notifications::new();
    let result = service.update(input, &mut notes).await;

    match result {
        Ok(updated) => Ok(status_response(updated, &notes, StatusCode::NO_CONTENT)),
        Err(e) => Err(e.into_app_error(notes)),
    }
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    security(("bearer_auth" = [])),
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<UserService<R>>,
    IdPath(id): IdPath,
) -> Result<Response, AppError> {
    let mut notes = Notifications::new();
    let result = service.delete_by_id(id, &mut notes).await;

    match result {
        Ok(deleted) => Ok(status_response(deleted, &notes, StatusCode::NO_CONTENT)),
        Err(e) => Err(e.into_app_error(notes)),
    }
}
