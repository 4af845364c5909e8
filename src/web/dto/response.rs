//! Response DTOs for the Web API.

use serde::Serialize;

use crate::board::{Comment, Post};

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// User information in responses.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    /// User ID.
    pub id: i64,
    /// Nickname.
    pub nickname: String,
}

/// Login response.
///
/// The token itself travels in the Set-Cookie header, not in the body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Nickname of the logged-in user.
    pub nickname: String,
    /// Token expiry in seconds.
    pub expires_in: u64,
}

/// Post list entry (title, author, date only).
#[derive(Debug, Serialize)]
pub struct PostSummary {
    /// Post ID.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Creation timestamp.
    pub date: String,
}

impl From<Post> for PostSummary {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            author: post.author,
            date: post.created_at,
        }
    }
}

/// Full post representation.
///
/// The guard password never appears in a response.
#[derive(Debug, Serialize)]
pub struct PostDetail {
    /// Post ID.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body content.
    pub content: String,
    /// Author display name.
    pub author: String,
    /// Creation timestamp.
    pub date: String,
}

impl From<Post> for PostDetail {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            date: post.created_at,
        }
    }
}

/// Comment representation.
#[derive(Debug, Serialize)]
pub struct CommentView {
    /// Comment ID.
    pub id: i64,
    /// Comment text.
    pub comment: String,
    /// Author display name.
    pub author: String,
    /// Creation timestamp.
    pub date: String,
}

impl From<Comment> for CommentView {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            comment: comment.body,
            author: comment.author,
            date: comment.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_envelope() {
        let json = serde_json::to_value(ApiResponse::new(UserInfo {
            id: 1,
            nickname: "abc123".to_string(),
        }))
        .unwrap();
        assert_eq!(json["data"]["id"], 1);
        assert_eq!(json["data"]["nickname"], "abc123");
    }

    #[test]
    fn test_post_detail_hides_password() {
        let post = Post {
            id: 1,
            title: "t".to_string(),
            content: "c".to_string(),
            author_id: None,
            author: "anon".to_string(),
            password: Some("secret".to_string()),
            created_at: "2026-01-01 00:00:00".to_string(),
        };
        let json = serde_json::to_value(PostDetail::from(post)).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["date"], "2026-01-01 00:00:00");
    }

    #[test]
    fn test_comment_view_field_names() {
        let comment = Comment {
            id: 2,
            post_id: 1,
            body: "nice".to_string(),
            author_id: 7,
            author: "abc123".to_string(),
            created_at: "2026-01-01 00:00:00".to_string(),
        };
        let json = serde_json::to_value(CommentView::from(comment)).unwrap();
        assert_eq!(json["comment"], "nice");
        assert!(json.get("body").is_none());
    }
}
