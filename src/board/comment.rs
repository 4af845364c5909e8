//! Comment model for Corkboard.

/// Comment entity attached to a post.
///
/// `post_id` must reference an existing post at creation time; the check
/// happens at write time rather than through a foreign key.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Comment {
    /// Unique comment ID.
    pub id: i64,
    /// ID of the post this comment belongs to.
    pub post_id: i64,
    /// Comment text.
    pub body: String,
    /// ID of the authoring user.
    pub author_id: i64,
    /// Author display name (denormalized nickname).
    pub author: String,
    /// Comment creation timestamp.
    pub created_at: String,
}

/// Data for creating a new comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    /// ID of the post to comment on.
    pub post_id: i64,
    /// Comment text.
    pub body: String,
    /// ID of the authoring user.
    pub author_id: i64,
    /// Author display name.
    pub author: String,
}

impl NewComment {
    /// Create a new comment record.
    pub fn new(
        post_id: i64,
        body: impl Into<String>,
        author_id: i64,
        author: impl Into<String>,
    ) -> Self {
        Self {
            post_id,
            body: body.into(),
            author_id,
            author: author.into(),
        }
    }
}
