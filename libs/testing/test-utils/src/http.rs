//! Request builders and body readers for `tower::ServiceExt::oneshot` tests.

use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Request with an empty body.
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_else(|e| panic!("invalid test request: {}", e))
}

/// Request with a JSON body.
pub fn json_request<T: Serialize>(method: &str, uri: &str, body: &T) -> Request<Body> {
    raw_json_request(
        method,
        uri,
        serde_json::to_string(body).unwrap_or_else(|e| panic!("unserializable body: {}", e)),
    )
}

/// Request with a JSON content type and an arbitrary, possibly malformed, body.
pub fn raw_json_request(method: &str, uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap_or_else(|e| panic!("invalid test request: {}", e))
}

/// Add an `Authorization` header to a request.
pub fn with_authorization(mut request: Request<Body>, value: &str) -> Request<Body> {
    let value = value
        .parse()
        .unwrap_or_else(|e| panic!("invalid Authorization value: {}", e));
    request.headers_mut().insert(header::AUTHORIZATION, value);
    request
}

/// Collect the body as raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap_or_else(|e| panic!("failed to read body: {}", e))
        .to_bytes()
        .to_vec()
}

/// Parse the body as JSON into `T`.
pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "body is not the expected JSON ({}): {}",
            e,
            String::from_utf8_lossy(&bytes)
        )
    })
}

/// Parse the body as an untyped JSON value.
pub async fn json_value(response: Response) -> Value {
    json_body(response).await
}
