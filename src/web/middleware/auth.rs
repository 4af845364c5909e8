//! Cookie token authentication middleware (the auth gate).

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{request::Parts, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

use crate::auth::{TokenClaims, TokenVerifier};
use crate::web::error::ApiError;

/// Shared state for the auth gate.
#[derive(Clone)]
pub struct AuthState {
    /// Token verifier built from the signing secret.
    pub verifier: TokenVerifier,
    /// Name of the cookie carrying the token.
    pub cookie_name: String,
}

impl AuthState {
    /// Create a new auth state from a secret key and cookie name.
    pub fn new(secret: &str, cookie_name: impl Into<String>) -> Self {
        Self {
            verifier: TokenVerifier::new(secret),
            cookie_name: cookie_name.into(),
        }
    }
}

/// Extractor for authenticated users.
///
/// Use this extractor to require authentication for a handler. The token is
/// read from the request's cookie: a missing cookie rejects with 401
/// "login required", a failing verification with 401 "invalid token".
/// On success the handler receives the token claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub TokenClaims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            // Get auth state from extensions (set by middleware)
            let auth_state = parts
                .extensions
                .get::<Arc<AuthState>>()
                .ok_or_else(|| ApiError::internal("auth state not configured"))?
                .clone();

            // Read the token from the named cookie
            let jar = CookieJar::from_headers(&parts.headers);
            let token = jar
                .get(&auth_state.cookie_name)
                .map(|cookie| cookie.value().to_string())
                .ok_or_else(|| ApiError::unauthenticated("login required"))?;

            // Verify signature and expiry
            let claims = auth_state
                .verifier
                .verify(&token)
                .map_err(|_| ApiError::invalid_token("invalid token"))?;

            Ok(AuthUser(claims))
        })
    }
}

/// Middleware function to inject auth state into request extensions.
pub async fn auth_context(
    auth_state: Arc<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    request.extensions_mut().insert(auth_state);
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenIssuer;
    use axum::http::header::COOKIE;

    #[test]
    fn test_auth_state_new() {
        let state = AuthState::new("test-secret", "token");
        assert_eq!(state.cookie_name, "token");
    }

    #[tokio::test]
    async fn test_extract_missing_cookie() {
        let state = Arc::new(AuthState::new("test-secret", "token"));

        let request = Request::builder().uri("/").body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        parts.extensions.insert(state);

        let result = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_extract_valid_cookie() {
        let state = Arc::new(AuthState::new("test-secret", "token"));
        let issuer = TokenIssuer::new("test-secret", 3600);
        let token = issuer.issue(7, "abc123").unwrap();

        let request = Request::builder()
            .uri("/")
            .header(COOKIE, format!("token={token}"))
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();
        parts.extensions.insert(state);

        let AuthUser(claims) = AuthUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.nickname, "abc123");
    }

    #[tokio::test]
    async fn test_extract_tampered_cookie() {
        let state = Arc::new(AuthState::new("test-secret", "token"));
        let issuer = TokenIssuer::new("other-secret", 3600);
        let token = issuer.issue(7, "abc123").unwrap();

        let request = Request::builder()
            .uri("/")
            .header(COOKIE, format!("token={token}"))
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();
        parts.extensions.insert(state);

        let result = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(result.is_err());
    }
}
