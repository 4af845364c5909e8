//! Comment repository for Corkboard.
//!
//! This module provides comment storage operations backed by sqlx/SQLite.

use sqlx::SqlitePool;

use super::comment::{Comment, NewComment};
use crate::db::CommentStore;
use crate::{CorkboardError, Result};

const COMMENT_COLUMNS: &str = "id, post_id, body, author_id, author, created_at";

/// Repository for comment storage, implementing [`CommentStore`].
pub struct CommentRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CommentRepository<'a> {
    /// Create a new CommentRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }
}

impl CommentStore for CommentRepository<'_> {
    type Comment = Comment;
    type NewComment = NewComment;

    /// Insert a new comment in the database.
    ///
    /// Returns the created comment with the assigned ID. The caller is
    /// responsible for checking that the referenced post exists.
    async fn insert(&self, new_comment: &NewComment) -> Result<Comment> {
        let result = sqlx::query(
            "INSERT INTO comments (post_id, body, author_id, author) VALUES (?, ?, ?, ?)",
        )
        .bind(new_comment.post_id)
        .bind(&new_comment.body)
        .bind(new_comment.author_id)
        .bind(&new_comment.author)
        .execute(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.find_by_id(id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("comment".to_string()))
    }

    /// Find a comment by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>> {
        let result = sqlx::query_as::<_, Comment>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List comments for a post, newest first.
    async fn list_by_post(&self, post_id: i64) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE post_id = ? ORDER BY created_at DESC, id DESC"
        ))
        .bind(post_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(comments)
    }

    /// Replace a comment's text.
    ///
    /// Returns true if the comment existed.
    async fn update_body(&self, id: i64, body: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE comments SET body = ? WHERE id = ?")
            .bind(body)
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a comment by ID.
    ///
    /// Returns true if a comment was deleted, false if not found.
    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
