//! Router configuration for the Web API.

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_comment, create_guarded_post, create_post, delete_comment, delete_guarded_post,
    delete_post, get_post, list_comments, list_posts, login, logout, signup,
    update_comment, update_guarded_post, update_post, AppState,
};
use super::middleware::{auth_context, create_cors_layer, AuthState};
use crate::config::PostAuthMode;

/// Create the main API router.
///
/// The post routes are wired for exactly one authorization mode; token and
/// password handlers are never mounted together.
pub fn create_router(
    app_state: Arc<AppState>,
    auth_state: Arc<AuthState>,
    cors_origins: &[String],
) -> Router {
    let auth_routes = Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", get(logout));

    let posts_routes = match app_state.post_auth {
        PostAuthMode::Token => Router::new()
            .route("/", get(list_posts).post(create_post))
            .route("/postupdate/:post_id", put(update_post))
            .route("/:post_id", get(get_post).delete(delete_post)),
        PostAuthMode::Password => Router::new()
            .route("/", get(list_posts).post(create_guarded_post))
            .route("/postupdate/:post_id", put(update_guarded_post))
            .route("/:post_id", get(get_post).delete(delete_guarded_post)),
    };

    let comments_routes = Router::new()
        .route("/commentupdate/:comment_id", put(update_comment))
        .route(
            "/:id",
            get(list_comments)
                .post(create_comment)
                .delete(delete_comment),
        );

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/posts", posts_routes)
        .nest("/comments", comments_routes);

    // Clone auth_state for the middleware closure
    let auth_state_for_middleware = auth_state.clone();

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(move |req, next| {
                    let state = auth_state_for_middleware.clone();
                    auth_context(state, req, next)
                })),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
