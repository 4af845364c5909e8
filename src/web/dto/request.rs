//! Request DTOs for the Web API.
//!
//! Presence-checked fields default to an empty string so a missing field
//! and an empty field report the same validation message.

use serde::Deserialize;

/// Signup request.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    /// Nickname.
    #[serde(default)]
    pub nickname: String,
    /// Password.
    #[serde(default)]
    pub password: String,
    /// Password confirmation.
    #[serde(default, rename = "passwordConfirm")]
    pub password_confirm: String,
}

/// Login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Nickname.
    #[serde(default)]
    pub nickname: String,
    /// Password.
    #[serde(default)]
    pub password: String,
}

/// Post creation request (token mode).
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    /// Post title.
    #[serde(default)]
    pub title: String,
    /// Post body content.
    #[serde(default)]
    pub content: String,
}

/// Post creation request (password mode).
#[derive(Debug, Deserialize)]
pub struct CreateGuardedPostRequest {
    /// Post title.
    #[serde(default)]
    pub title: String,
    /// Author display name.
    #[serde(default, rename = "user")]
    pub author: String,
    /// Post body content.
    #[serde(default)]
    pub content: String,
    /// Guard password stored with the post.
    #[serde(default)]
    pub password: String,
}

/// Post update request (token mode).
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    /// New title.
    #[serde(default)]
    pub title: String,
    /// New body content.
    #[serde(default)]
    pub content: String,
}

/// Post update request (password mode).
#[derive(Debug, Deserialize)]
pub struct UpdateGuardedPostRequest {
    /// New title.
    #[serde(default)]
    pub title: String,
    /// New body content.
    #[serde(default)]
    pub content: String,
    /// Guard password to compare against the stored one.
    #[serde(default, rename = "passwordConfirm")]
    pub password_confirm: String,
}

/// Post deletion request (password mode).
#[derive(Debug, Deserialize)]
pub struct DeleteGuardedPostRequest {
    /// Guard password to compare against the stored one.
    #[serde(default)]
    pub password: String,
}

/// Comment creation/update request.
#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    /// Comment text.
    #[serde(default)]
    pub comment: String,
}

/// Pagination query for the post list.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// 1-based page number.
    pub page: Option<u32>,
}

impl PageQuery {
    /// Posts per page.
    pub const PER_PAGE: i64 = 10;

    /// Convert to (offset, limit) for the repository.
    pub fn to_offset_limit(&self) -> (i64, i64) {
        let page = self.page.unwrap_or(1).max(1) as i64;
        ((page - 1) * Self::PER_PAGE, Self::PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_missing_fields_default_empty() {
        let req: SignupRequest = serde_json::from_str("{}").unwrap();
        assert!(req.nickname.is_empty());
        assert!(req.password.is_empty());
        assert!(req.password_confirm.is_empty());
    }

    #[test]
    fn test_signup_request_camel_case_confirm() {
        let req: SignupRequest = serde_json::from_str(
            r#"{"nickname":"abc","password":"abcd","passwordConfirm":"abcd"}"#,
        )
        .unwrap();
        assert_eq!(req.password_confirm, "abcd");
    }

    #[test]
    fn test_guarded_post_request_author_field() {
        let req: CreateGuardedPostRequest = serde_json::from_str(
            r#"{"title":"t","user":"anon","content":"c","password":"pw"}"#,
        )
        .unwrap();
        assert_eq!(req.author, "anon");
    }

    #[test]
    fn test_page_query_offsets() {
        assert_eq!(PageQuery { page: None }.to_offset_limit(), (0, 10));
        assert_eq!(PageQuery { page: Some(1) }.to_offset_limit(), (0, 10));
        assert_eq!(PageQuery { page: Some(3) }.to_offset_limit(), (20, 10));
        // Page 0 clamps to page 1
        assert_eq!(PageQuery { page: Some(0) }.to_offset_limit(), (0, 10));
    }
}
