//! Post model for Corkboard.

/// Post entity.
///
/// `author_id` is set for posts created by an authenticated user and is the
/// basis of ownership checks in token mode. `password` is set for anonymous
/// posts in password mode. The author reference is immutable after creation.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    /// Unique post ID.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body content.
    pub content: String,
    /// ID of the authoring user (None for anonymous guarded posts).
    pub author_id: Option<i64>,
    /// Author display name (denormalized nickname, or the supplied name).
    pub author: String,
    /// Guard password for anonymous posts (None in token mode).
    pub password: Option<String>,
    /// Post creation timestamp.
    pub created_at: String,
}

/// Data for creating a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// Post title.
    pub title: String,
    /// Post body content.
    pub content: String,
    /// ID of the authoring user (None for anonymous guarded posts).
    pub author_id: Option<i64>,
    /// Author display name.
    pub author: String,
    /// Guard password for anonymous posts.
    pub password: Option<String>,
}

impl NewPost {
    /// Create a post authored by an authenticated user.
    pub fn by_user(
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: i64,
        nickname: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author_id: Some(author_id),
            author: nickname.into(),
            password: None,
        }
    }

    /// Create an anonymous post guarded by a password.
    pub fn guarded(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author_id: None,
            author: author.into(),
            password: Some(password.into()),
        }
    }
}

/// Data for updating an existing post.
///
/// The author reference and creation date are never updated.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    /// New title.
    pub title: String,
    /// New body content.
    pub content: String,
}

impl PostUpdate {
    /// Create a post update.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
