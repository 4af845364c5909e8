//! Post repository for Corkboard.
//!
//! This module provides post storage operations backed by sqlx/SQLite,
//! including the transactional cascade delete of a post and its comments.

use sqlx::SqlitePool;

use super::post::{NewPost, Post, PostUpdate};
use crate::db::PostStore;
use crate::{CorkboardError, Result};

const POST_COLUMNS: &str = "id, title, content, author_id, author, password, created_at";

/// Repository for post storage, implementing [`PostStore`].
pub struct PostRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PostRepository<'a> {
    /// Create a new PostRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }
}

impl PostStore for PostRepository<'_> {
    type Post = Post;
    type NewPost = NewPost;
    type PostUpdate = PostUpdate;

    /// Insert a new post in the database.
    ///
    /// Returns the created post with the assigned ID.
    async fn insert(&self, new_post: &NewPost) -> Result<Post> {
        let result = sqlx::query(
            "INSERT INTO posts (title, content, author_id, author, password)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&new_post.title)
        .bind(&new_post.content)
        .bind(new_post.author_id)
        .bind(&new_post.author)
        .bind(&new_post.password)
        .execute(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.find_by_id(id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("post".to_string()))
    }

    /// Find a post by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>> {
        let result = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List a page of posts, newest first.
    async fn list_page(&self, offset: i64, limit: i64) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts
             ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(posts)
    }

    /// Update a post's title and content by ID.
    ///
    /// The author reference and creation date are left untouched.
    /// Returns the updated post, or None if not found.
    async fn update(&self, id: i64, update: &PostUpdate) -> Result<Option<Post>> {
        let result = sqlx::query("UPDATE posts SET title = ?, content = ? WHERE id = ?")
            .bind(&update.title)
            .bind(&update.content)
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| CorkboardError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Delete a post and all comments referencing it.
    ///
    /// Both deletes run inside one transaction, so a post is never removed
    /// while its comments survive. Returns true if the post existed; under
    /// concurrent deletes of the same id, exactly one caller sees true.
    async fn delete_cascade(&self, id: i64) -> Result<bool> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| CorkboardError::Database(e.to_string()))?;

        let affected = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| CorkboardError::Database(e.to_string()))?
            .rows_affected();

        if affected == 0 {
            tx.rollback()
                .await
                .map_err(|e| CorkboardError::Database(e.to_string()))?;
            return Ok(false);
        }

        sqlx::query("DELETE FROM comments WHERE post_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| CorkboardError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(true)
    }

    /// Delete a post whose stored guard password matches, cascading to its
    /// comments. The id and password filter in one statement, so a wrong
    /// password deletes nothing. Returns true if a matching post existed.
    async fn delete_cascade_guarded(&self, id: i64, password: &str) -> Result<bool> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| CorkboardError::Database(e.to_string()))?;

        let affected = sqlx::query("DELETE FROM posts WHERE id = ? AND password = ?")
            .bind(id)
            .bind(password)
            .execute(&mut *tx)
            .await
            .map_err(|e| CorkboardError::Database(e.to_string()))?
            .rows_affected();

        if affected == 0 {
            tx.rollback()
                .await
                .map_err(|e| CorkboardError::Database(e.to_string()))?;
            return Ok(false);
        }

        sqlx::query("DELETE FROM comments WHERE post_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| CorkboardError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(true)
    }
}
