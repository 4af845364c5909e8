//! User model for Corkboard.

/// User entity representing a registered user.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (store-assigned).
    pub id: i64,
    /// Nickname (unique).
    pub nickname: String,
    /// Password hash (Argon2).
    pub password: String,
    /// Account creation timestamp.
    pub created_at: String,
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Nickname.
    pub nickname: String,
    /// Password hash (should be pre-hashed with Argon2).
    pub password: String,
}

impl NewUser {
    /// Create a new user record.
    pub fn new(nickname: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            password: password.into(),
        }
    }
}
