//! Reusable OpenAPI response types for consistent API documentation.

use crate::response::ErrorEnvelope;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "data": null,
        "errors": ["An internal server error occurred"]
    })
)]
pub struct InternalServerErrorResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed body, invalid id or rejected by a business rule",
    content_type = "application/json",
    example = json!({
        "success": false,
        "data": null,
        "errors": ["Invalid id: abc"]
    })
)]
pub struct BadRequestResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Precondition Failed - validation rule violated",
    content_type = "application/json",
    example = json!({
        "success": false,
        "data": null,
        "errors": ["Name is required", "Weight must be greater than 0"]
    })
)]
pub struct PreconditionFailedResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "success": false,
        "data": null,
        "errors": ["Product 1 not found"]
    })
)]
pub struct NotFoundResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Unauthorized - missing, malformed or expired credentials",
    content_type = "application/json",
    example = json!({
        "success": false,
        "data": null,
        "errors": ["Invalid token"]
    })
)]
pub struct UnauthorizedResponse(pub ErrorEnvelope);
