//! Test helpers for Web API tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::http::header::COOKIE;
use axum::http::HeaderValue;
use axum_test::TestServer;
use serde_json::json;

use corkboard::config::AuthConfig;
use corkboard::web::create_router;
use corkboard::web::handlers::AppState;
use corkboard::web::middleware::AuthState;
use corkboard::{Database, PostAuthMode};

/// Signing secret used by all test servers.
pub const TEST_SECRET: &str = "test-secret-key-for-testing-only";

/// Create a test server with an in-memory database.
pub async fn create_test_server(mode: PostAuthMode) -> TestServer {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    create_test_server_with_db(mode, db)
}

/// Create a test server over an existing database handle.
pub fn create_test_server_with_db(mode: PostAuthMode, db: Database) -> TestServer {
    let auth = AuthConfig {
        jwt_secret: TEST_SECRET.to_string(),
        post_auth: mode,
        ..Default::default()
    };

    let app_state = Arc::new(AppState::new(db, &auth));
    let auth_state = Arc::new(AuthState::new(TEST_SECRET, &auth.cookie_name));
    let router = create_router(app_state, auth_state, &[]);

    TestServer::new(router).expect("Failed to create test server")
}

/// Sign up a user and return the assigned user id.
pub async fn signup_user(server: &TestServer, nickname: &str, password: &str) -> i64 {
    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "nickname": nickname,
            "password": password,
            "passwordConfirm": password
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["data"]["id"]
        .as_i64()
        .expect("signup response carries the user id")
}

/// Log in and return the token cookie value.
pub async fn login_user(server: &TestServer, nickname: &str, password: &str) -> String {
    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "nickname": nickname,
            "password": password
        }))
        .await;

    response.assert_status_ok();
    response.cookie("token").value().to_string()
}

/// Sign up, log in, and return (user id, token cookie value).
pub async fn signup_and_login(server: &TestServer, nickname: &str, password: &str) -> (i64, String) {
    let id = signup_user(server, nickname, password).await;
    let token = login_user(server, nickname, password).await;
    (id, token)
}

/// Build a Cookie header value carrying the token.
pub fn cookie_header(token: &str) -> (axum::http::HeaderName, HeaderValue) {
    (
        COOKIE,
        HeaderValue::from_str(&format!("token={token}")).expect("valid cookie header"),
    )
}

/// Create a post as a logged-in user and return its id (token mode).
pub async fn create_post(server: &TestServer, token: &str, title: &str, content: &str) -> i64 {
    let (name, value) = cookie_header(token);
    let response = server
        .post("/api/posts")
        .add_header(name, value)
        .json(&json!({ "title": title, "content": content }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["data"]["id"]
        .as_i64()
        .expect("create response carries the post id")
}

/// Comment on a post as a logged-in user and return the comment id.
pub async fn create_comment(server: &TestServer, token: &str, post_id: i64, text: &str) -> i64 {
    let (name, value) = cookie_header(token);
    let response = server
        .post(&format!("/api/comments/{post_id}"))
        .add_header(name, value)
        .json(&json!({ "comment": text }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["data"]["id"]
        .as_i64()
        .expect("create response carries the comment id")
}
