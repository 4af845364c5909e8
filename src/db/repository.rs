//! User repository for Corkboard.
//!
//! This module provides user storage operations backed by sqlx/SQLite.

use sqlx::SqlitePool;

use super::traits::UserStore;
use super::user::{NewUser, User};
use crate::{CorkboardError, Result};

/// Repository for user storage, implementing [`UserStore`].
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserStore for UserRepository<'_> {
    /// Insert a new user in the database.
    ///
    /// Returns the created user with the assigned ID, or
    /// [`CorkboardError::Conflict`] when the nickname is already taken.
    async fn insert(&self, new_user: &NewUser) -> Result<User> {
        let result = sqlx::query("INSERT INTO users (nickname, password) VALUES (?, ?)")
            .bind(&new_user.nickname)
            .bind(&new_user.password)
            .execute(self.pool)
            .await
            .map_err(|e| {
                if e.to_string().contains("UNIQUE") {
                    CorkboardError::Conflict("nickname".to_string())
                } else {
                    CorkboardError::Database(e.to_string())
                }
            })?;

        let id = result.last_insert_rowid();
        self.find_by_id(id)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("user".to_string()))
    }

    /// Find a user by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(
            "SELECT id, nickname, password, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Find a user by nickname (case-sensitive exact match).
    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(
            "SELECT id, nickname, password, created_at FROM users WHERE nickname = ?",
        )
        .bind(nickname)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Check if a nickname is already taken (case-sensitive).
    async fn nickname_exists(&self, nickname: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE nickname = ?)")
                .bind(nickname)
                .fetch_one(self.pool)
                .await
                .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    async fn setup() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let db = setup().await;
        let repo = UserRepository::new(db.pool());

        let user = repo
            .insert(&NewUser::new("abc123", "hashedpw"))
            .await
            .unwrap();
        assert!(user.id > 0);
        assert_eq!(user.nickname, "abc123");
        assert!(!user.created_at.is_empty());

        let found = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(found.nickname, "abc123");

        let found = repo.find_by_nickname("abc123").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
    }

    #[tokio::test]
    async fn test_insert_duplicate_nickname() {
        let db = setup().await;
        let repo = UserRepository::new(db.pool());

        repo.insert(&NewUser::new("abc123", "hash1")).await.unwrap();
        let result = repo.insert(&NewUser::new("abc123", "hash2")).await;
        assert!(matches!(result, Err(CorkboardError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_nickname_exists() {
        let db = setup().await;
        let repo = UserRepository::new(db.pool());

        assert!(!repo.nickname_exists("abc123").await.unwrap());
        repo.insert(&NewUser::new("abc123", "hash")).await.unwrap();
        assert!(repo.nickname_exists("abc123").await.unwrap());
    }

    #[tokio::test]
    async fn test_nickname_lookup_is_case_sensitive() {
        let db = setup().await;
        let repo = UserRepository::new(db.pool());

        repo.insert(&NewUser::new("Alice99", "hash")).await.unwrap();
        assert!(repo.find_by_nickname("alice99").await.unwrap().is_none());
        assert!(!repo.nickname_exists("ALICE99").await.unwrap());
    }

    #[tokio::test]
    async fn test_find_missing_user() {
        let db = setup().await;
        let repo = UserRepository::new(db.pool());

        assert!(repo.find_by_id(999).await.unwrap().is_none());
        assert!(repo.find_by_nickname("ghost").await.unwrap().is_none());
    }
}
