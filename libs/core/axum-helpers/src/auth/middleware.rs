use super::token::{AuthError, TokenIssuer};
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

/// Extract the token from `Authorization: Bearer <token>`.
fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Bearer token middleware
///
/// Rejects the request with a 401 envelope when the header is missing or the
/// token fails signature, issuer, audience or lifetime checks. Inserts
/// [`TokenClaims`](super::TokenClaims) into request extensions on success.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::auth::{TokenIssuer, require_bearer};
///
/// let protected = Router::new()
///     .route("/api/v1/products", get(list_products))
///     .layer(axum::middleware::from_fn_with_state(issuer.clone(), require_bearer));
/// ```
pub async fn require_bearer(
    State(issuer): State<TokenIssuer>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = extract_bearer(request.headers()) else {
        tracing::debug!("No bearer token in Authorization header");
        return Err(AuthError::MissingToken.into());
    };

    let claims = issuer.validate(token).inspect_err(|e| {
        tracing::debug!("Bearer token rejected: {}", e);
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthConfig, TokenClaims};
    use axum::{
        Extension, Router,
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::get,
    };
    use tower::ServiceExt;

    const KEY: &str = "this-is-a-valid-secret-with-32-chars!";

    fn app(issuer: TokenIssuer) -> Router {
        async fn whoami(Extension(claims): Extension<TokenClaims>) -> String {
            claims.iss
        }

        Router::new()
            .route("/protected", get(whoami))
            .layer(middleware::from_fn_with_state(issuer, require_bearer))
    }

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(AuthConfig::new(KEY, 1, "mw-tests", "mw-clients").unwrap())
    }

    async fn call(app: Router, authorization: Option<&str>) -> StatusCode {
        let mut builder = Request::builder().uri("/protected");
        if let Some(value) = authorization {
            builder = builder.header("authorization", value);
        }
        app.oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[test]
    fn test_extract_bearer() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_bearer(&headers), None);

        headers.insert(header::AUTHORIZATION, "Bearer abc.def".parse().unwrap());
        assert_eq!(extract_bearer(&headers), Some("abc.def"));

        headers.insert(header::AUTHORIZATION, "Basic abc".parse().unwrap());
        assert_eq!(extract_bearer(&headers), None);

        headers.insert(header::AUTHORIZATION, "Bearer ".parse().unwrap());
        assert_eq!(extract_bearer(&headers), None);
    }

    #[tokio::test]
    async fn test_valid_token_passes() {
        let issuer = issuer();
        let token = issuer.issue().unwrap().access_token;
        let status = call(app(issuer), Some(&format!("Bearer {}", token))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_and_malformed_tokens_are_401() {
        let issuer = issuer();
        assert_eq!(call(app(issuer.clone()), None).await, StatusCode::UNAUTHORIZED);
        assert_eq!(
            call(app(issuer.clone()), Some("Bearer not-a-token")).await,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            call(app(issuer), Some("Token abc")).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn test_token_from_other_issuer_is_401() {
        let other = TokenIssuer::new(
            AuthConfig::new("a-completely-different-32-char-secret", 1, "mw-tests", "mw-clients")
                .unwrap(),
        );
        let token = other.issue().unwrap().access_token;
        let status = call(app(issuer()), Some(&format!("Bearer {}", token))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
