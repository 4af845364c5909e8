//! Comment handlers for the Web API.
//!
//! Listing is public; all mutation requires the auth gate and author
//! ownership.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::auth::validation;
use crate::board::{CommentRepository, NewComment, PostRepository};
use crate::db::{CommentStore, PostStore};
use crate::web::dto::{ApiResponse, CommentRequest, CommentView};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::web::middleware::AuthUser;

/// GET /api/comments/:post_id - List comments for a post, newest first.
///
/// A post with no comments reports 404.
pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<CommentView>>>, ApiError> {
    let comments = CommentRepository::new(state.db.pool())
        .list_by_post(post_id)
        .await?;

    if comments.is_empty() {
        return Err(ApiError::not_found("no comments for this post"));
    }

    let views: Vec<CommentView> = comments.into_iter().map(CommentView::from).collect();
    Ok(Json(ApiResponse::new(views)))
}

/// POST /api/comments/:post_id - Comment on a post as the authenticated user.
///
/// The referenced post must exist at creation time.
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(post_id): Path<i64>,
    Json(req): Json<CommentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CommentView>>), ApiError> {
    validation::validate_comment(&req.comment)?;

    PostRepository::new(state.db.pool())
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("post not found"))?;

    let comment = CommentRepository::new(state.db.pool())
        .insert(&NewComment::new(
            post_id,
            &req.comment,
            claims.sub,
            &claims.nickname,
        ))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(CommentView::from(comment))),
    ))
}

/// PUT /api/comments/commentupdate/:comment_id - Update a comment, author only.
pub async fn update_comment(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(comment_id): Path<i64>,
    Json(req): Json<CommentRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    validation::validate_comment(&req.comment)?;

    let repo = CommentRepository::new(state.db.pool());
    let comment = repo
        .find_by_id(comment_id)
        .await?
        .ok_or_else(|| ApiError::not_found("comment not found"))?;

    if comment.author_id != claims.sub {
        return Err(ApiError::forbidden(
            "you are not the author of this comment",
        ));
    }

    if !repo.update_body(comment_id, &req.comment).await? {
        return Err(ApiError::not_found("comment not found"));
    }

    Ok(Json(ApiResponse::new(())))
}

/// DELETE /api/comments/:comment_id - Delete a comment, author only.
pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(comment_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let repo = CommentRepository::new(state.db.pool());
    let comment = repo
        .find_by_id(comment_id)
        .await?
        .ok_or_else(|| ApiError::not_found("comment not found"))?;

    if comment.author_id != claims.sub {
        return Err(ApiError::forbidden(
            "you are not the author of this comment",
        ));
    }

    if !repo.delete(comment_id).await? {
        return Err(ApiError::not_found("comment not found"));
    }

    Ok(Json(ApiResponse::new(())))
}
