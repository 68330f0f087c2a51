//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Runs before handler logic:
/// - body that cannot be bound to `T` (syntax or type errors) → 400
/// - `Validate` failures → 412 when the messages describe a violated rule
///   ("required", "must be", "range"), 400 otherwise
///
/// Every message ends up in the envelope's `errors` array.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateThing {
///     #[validate(length(min = 1, message = "Name is required"))]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateThing>) -> String {
///     payload.name
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Payload {
        #[validate(required(message = "Name is required"))]
        name: Option<String>,
        #[serde(default)]
        #[validate(range(exclusive_min = 0.0, message = "Weight must be greater than 0"))]
        weight: f64,
    }

    async fn handler(ValidatedJson(p): ValidatedJson<Payload>) -> String {
        p.name.unwrap_or_default()
    }

    async fn post_json(body: &str) -> (StatusCode, Value) {
        let app = Router::new().route("/", post(handler));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_valid_payload_passes() {
        let (status, _) = post_json(r#"{"name":"Widget","weight":1.0}"#).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rule_violation_is_412() {
        let (status, body) = post_json(r#"{"weight":0}"#).await;
        assert_eq!(status, StatusCode::PRECONDITION_FAILED);
        assert_eq!(
            body["errors"],
            json!(["Name is required", "Weight must be greater than 0"])
        );
        assert_eq!(body["success"], json!(false));
    }

    #[tokio::test]
    async fn test_type_error_is_400() {
        let (status, body) = post_json(r#"{"name":"Widget","weight":"heavy"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let (status, _) = post_json("{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
