//! Token endpoint

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Response,
    routing::post,
};
use axum_helpers::{
    AccessToken, ApiResponse, AppError, AuthError, TokenIssuer,
    auth::SECURITY_KEY_HEADER,
    errors::responses::{
        InternalServerErrorResponse, PreconditionFailedResponse, UnauthorizedResponse,
    },
};

pub const TAG: &str = "auth";

pub fn router(issuer: TokenIssuer) -> Router {
    Router::new()
        .route("/token", post(issue_token))
        .with_state(issuer)
}

/// Exchange the shared security key for a bearer token
#[utoipa::path(
    post,
    path = "/api/v1/auth/token",
    tag = TAG,
    params(
        ("X-Security-Key" = String, Header, description = "Shared secret configured on the server")
    ),
    responses(
        (status = 200, description = "Token issued", body = inline(ApiResponse<AccessToken>)),
        (status = 401, response = UnauthorizedResponse),
        (status = 412, response = PreconditionFailedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn issue_token(
    State(issuer): State<TokenIssuer>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    // Present but not visible ASCII cannot match the key
    let provided = match headers.get(SECURITY_KEY_HEADER) {
        Some(value) => Some(value.to_str().map_err(|_| AuthError::InvalidKey)?),
        None => None,
    };

    issuer.authenticate(provided)?;
    let token = issuer.issue()?;

    Ok(ApiResponse::ok(token).with_status(StatusCode::OK))
}
