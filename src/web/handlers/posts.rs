//! Post handlers for the Web API.
//!
//! Reads are public. Mutation comes in two authorization modes wired as
//! separate route sets: token mode (auth gate + author id ownership) and
//! password mode (anonymous posts guarded by a per-post password). The
//! router mounts exactly one of the two sets.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::auth::validation::{self, ValidationError};
use crate::board::{NewPost, PostRepository, PostUpdate};
use crate::db::PostStore;
use crate::web::dto::{
    ApiResponse, CreateGuardedPostRequest, CreatePostRequest, DeleteGuardedPostRequest,
    PageQuery, PostDetail, PostSummary, UpdateGuardedPostRequest, UpdatePostRequest,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::web::middleware::AuthUser;

/// GET /api/posts - List posts, newest first, 10 per page.
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(page): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<PostSummary>>>, ApiError> {
    let (offset, limit) = page.to_offset_limit();

    let posts = PostRepository::new(state.db.pool())
        .list_page(offset, limit)
        .await?;

    let summaries: Vec<PostSummary> = posts.into_iter().map(PostSummary::from).collect();
    Ok(Json(ApiResponse::new(summaries)))
}

/// GET /api/posts/:post_id - Fetch one post.
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
) -> Result<Json<ApiResponse<PostDetail>>, ApiError> {
    let post = PostRepository::new(state.db.pool())
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("post not found"))?;

    Ok(Json(ApiResponse::new(PostDetail::from(post))))
}

// ============================================================================
// Token mode
// ============================================================================

/// POST /api/posts - Create a post as the authenticated user.
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PostDetail>>), ApiError> {
    validation::validate_post(&req.title, &req.content)?;

    let post = PostRepository::new(state.db.pool())
        .insert(&NewPost::by_user(
            &req.title,
            &req.content,
            claims.sub,
            &claims.nickname,
        ))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(PostDetail::from(post))),
    ))
}

/// PUT /api/posts/postupdate/:post_id - Update a post, author only.
///
/// The creation date and author reference are preserved.
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(post_id): Path<i64>,
    Json(req): Json<UpdatePostRequest>,
) -> Result<Json<ApiResponse<PostDetail>>, ApiError> {
    validation::validate_post(&req.title, &req.content)?;

    let repo = PostRepository::new(state.db.pool());
    let post = repo
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("post not found"))?;

    if post.author_id != Some(claims.sub) {
        return Err(ApiError::forbidden("you are not the author of this post"));
    }

    let updated = repo
        .update(post_id, &PostUpdate::new(&req.title, &req.content))
        .await?
        .ok_or_else(|| ApiError::not_found("post not found"))?;

    Ok(Json(ApiResponse::new(PostDetail::from(updated))))
}

/// DELETE /api/posts/:post_id - Delete a post and its comments, author only.
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(post_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let repo = PostRepository::new(state.db.pool());
    let post = repo
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("post not found"))?;

    if post.author_id != Some(claims.sub) {
        return Err(ApiError::forbidden("you are not the author of this post"));
    }

    // A concurrent delete may win between the check above and here; the
    // loser observes zero affected rows.
    if !repo.delete_cascade(post_id).await? {
        return Err(ApiError::not_found("post not found"));
    }

    Ok(Json(ApiResponse::new(())))
}

// ============================================================================
// Password mode
// ============================================================================

/// POST /api/posts - Create an anonymous post guarded by a password.
pub async fn create_guarded_post(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateGuardedPostRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PostDetail>>), ApiError> {
    validation::validate_guarded_post(&req.title, &req.author, &req.content, &req.password)?;

    let post = PostRepository::new(state.db.pool())
        .insert(&NewPost::guarded(
            &req.title,
            &req.content,
            &req.author,
            &req.password,
        ))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(PostDetail::from(post))),
    ))
}

/// PUT /api/posts/postupdate/:post_id - Update a guarded post.
///
/// The supplied passwordConfirm must match the password stored with the
/// post at creation.
pub async fn update_guarded_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
    Json(req): Json<UpdateGuardedPostRequest>,
) -> Result<Json<ApiResponse<PostDetail>>, ApiError> {
    validation::validate_post(&req.title, &req.content)?;
    if req.password_confirm.is_empty() {
        return Err(ValidationError::PostPasswordRequired.into());
    }

    let repo = PostRepository::new(state.db.pool());
    let post = repo
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("post not found"))?;

    if post.password.as_deref() != Some(req.password_confirm.as_str()) {
        return Err(ApiError::forbidden("post password does not match"));
    }

    let updated = repo
        .update(post_id, &PostUpdate::new(&req.title, &req.content))
        .await?
        .ok_or_else(|| ApiError::not_found("post not found"))?;

    Ok(Json(ApiResponse::new(PostDetail::from(updated))))
}

/// DELETE /api/posts/:post_id - Delete a guarded post and its comments.
pub async fn delete_guarded_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
    Json(req): Json<DeleteGuardedPostRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if req.password.is_empty() {
        return Err(ValidationError::PostPasswordRequired.into());
    }

    let repo = PostRepository::new(state.db.pool());
    let post = repo
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("post not found"))?;

    if post.password.as_deref() != Some(req.password.as_str()) {
        return Err(ApiError::forbidden("post password does not match"));
    }

    if !repo.delete_cascade_guarded(post_id, &req.password).await? {
        return Err(ApiError::not_found("post not found"));
    }

    Ok(Json(ApiResponse::new(())))
}
