//! End-to-end tests through the full router: versioned routes, bearer
//! middleware, envelope and status contract.

use axum::Router;
use axum::http::StatusCode;
use axum_helpers::TokenIssuer;
use catalog_api::{AppState, Config, build_router};
use core_config::{AppInfo, Environment, server::ServerConfig};
use serde_json::{Value, json};
use test_utils::assertions::{assert_failure_envelope, assert_success_envelope};
use test_utils::auth::{self, TEST_SECURITY_KEY, bearer};
use test_utils::http::{
    empty_request, json_request, json_value, raw_json_request, with_authorization,
};
use tower::ServiceExt; // For oneshot()

fn test_config() -> Config {
    Config {
        app: AppInfo {
            name: "catalog_api",
            version: "0.0.0-test",
        },
        server: ServerConfig::default(),
        auth: auth::config(),
        environment: Environment::Development,
    }
}

fn test_app() -> (Router, TokenIssuer) {
    let state = AppState::new(test_config());
    let issuer = state.issuer.clone();
    (build_router(&state).unwrap(), issuer)
}

async fn request_token(app: Router, key: Option<&str>) -> (StatusCode, Value) {
    let mut request = empty_request("POST", "/api/v1/auth/token");
    if let Some(key) = key {
        request
            .headers_mut()
            .insert("x-security-key", key.parse().unwrap());
    }
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    (status, json_value(response).await)
}

#[tokio::test]
async fn test_token_issued_for_correct_key() {
    let (app, _) = test_app();
    let (status, body) = request_token(app, Some(TEST_SECURITY_KEY)).await;

    assert_eq!(status, StatusCode::OK);
    let data = assert_success_envelope(&body);
    assert!(!data["accessToken"].as_str().unwrap().is_empty());
    assert_eq!(data["tokenType"], json!("Bearer"));
    assert_eq!(data["expiresIn"], json!(3600));
}

#[tokio::test]
async fn test_sequential_tokens_differ() {
    let (app, _) = test_app();
    let (_, first) = request_token(app.clone(), Some(TEST_SECURITY_KEY)).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let (_, second) = request_token(app, Some(TEST_SECURITY_KEY)).await;

    assert_ne!(first["data"]["accessToken"], second["data"]["accessToken"]);
}

#[tokio::test]
async fn test_missing_or_blank_key_is_412() {
    let (app, _) = test_app();
    for key in [None, Some(""), Some("   ")] {
        let (status, body) = request_token(app.clone(), key).await;
        assert_eq!(status, StatusCode::PRECONDITION_FAILED, "key {:?}", key);
        assert_failure_envelope(&body, &["Security key is required"]);
    }
}

#[tokio::test]
async fn test_wrong_key_variants_are_401() {
    let (app, _) = test_app();
    let extra = format!("{}x", TEST_SECURITY_KEY);
    let truncated = &TEST_SECURITY_KEY[..TEST_SECURITY_KEY.len() - 1];
    let upper = TEST_SECURITY_KEY.to_uppercase();

    for key in [extra.as_str(), truncated, upper.as_str(), "wrong"] {
        let (status, body) = request_token(app.clone(), Some(key)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "key {}", key);
        assert_eq!(body["success"], json!(false));
    }
}

#[tokio::test]
async fn test_protected_routes_require_bearer() {
    let (app, _) = test_app();

    for uri in ["/api/v1/products", "/api/v1/users", "/api/v1/products/1"] {
        let response = app.clone().oneshot(empty_request("GET", uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "uri {}", uri);
    }
}

#[tokio::test]
async fn test_malformed_and_foreign_tokens_are_401() {
    let (app, _) = test_app();
    let foreign = TokenIssuer::new(
        axum_helpers::AuthConfig::new(
            "another-key-that-is-long-enough-for-hmac",
            5,
            auth::TEST_SENDER,
            auth::TEST_VALID_ON,
        )
        .unwrap(),
    );

    let foreign_token = bearer(&foreign);

    for authorization in ["Bearer garbage", "Bearer a.b.c", foreign_token.as_str()] {
        let request = with_authorization(empty_request("GET", "/api/v1/products"), authorization);
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn test_create_widget_scenario() {
    let (app, issuer) = test_app();
    let token = bearer(&issuer);

    let request = with_authorization(
        json_request(
            "POST",
            "/api/v1/products",
            &json!({ "id": 0, "name": "Widget", "weight": 3.12 }),
        ),
        &token,
    );
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_value(response).await;
    let data = assert_success_envelope(&body);
    assert!(data["id"].as_u64().unwrap() > 0);
    assert_eq!(data["name"], json!("Widget"));
    assert_eq!(data["weight"], json!(3.12));

    // Same name, different case
    let request = with_authorization(
        json_request("POST", "/api/v1/products", &json!({ "name": "WIDGET", "weight": 1.0 })),
        &token,
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_value(response).await;
    assert!(body["errors"][0].as_str().unwrap().contains("already registered"));
}

#[tokio::test]
async fn test_validation_contract_through_full_stack() {
    let (app, issuer) = test_app();
    let token = bearer(&issuer);

    let request = with_authorization(
        json_request("POST", "/api/v1/products", &json!({ "name": null, "weight": 1.0 })),
        &token,
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);
    assert_failure_envelope(&json_value(response).await, &["Name is required"]);

    let request = with_authorization(
        json_request("POST", "/api/v1/products", &json!({ "name": "Widget", "weight": 0 })),
        &token,
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);
    assert_failure_envelope(&json_value(response).await, &["Weight must be greater than 0"]);

    let request = with_authorization(
        raw_json_request("POST", "/api/v1/products", "{\"name\":"),
        &token,
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = with_authorization(empty_request("GET", "/api/v1/products/abc"), &token);
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_users_routes_are_wired() {
    let (app, issuer) = test_app();
    let token = bearer(&issuer);

    let request = with_authorization(
        json_request(
            "POST",
            "/api/v1/users",
            &json!({ "name": "Ada", "email": "ada@example.com" }),
        ),
        &token,
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let request = with_authorization(empty_request("GET", "/api/v1/users"), &token);
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_value(response).await;
    assert_eq!(assert_success_envelope(&body).as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_health_and_unknown_routes() {
    let (app, _) = test_app();

    let response = app.clone().oneshot(empty_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_value(response).await["status"], json!("healthy"));

    let response = app.oneshot(empty_request("GET", "/api/v2/products")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_failure_envelope(
        &json_value(response).await,
        &["The requested resource was not found"],
    );
}
