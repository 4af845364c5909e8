//! Storage capability traits for Corkboard.
//!
//! The handlers only need `find`, `insert`, `update`, and `delete` with
//! filter-by-id and filter-by-foreign-key, so the storage backend is
//! expressed as a small capability interface. The sqlx repositories in this
//! crate implement it; a document-oriented backend could provide its own
//! implementations without touching the handlers' logic.

use crate::db::{NewUser, User};
use crate::Result;

/// Capability interface for user storage.
pub trait UserStore {
    /// Insert a new user, returning the stored record with its assigned id.
    fn insert(&self, new_user: &NewUser) -> impl std::future::Future<Output = Result<User>> + Send;

    /// Find a user by ID.
    fn find_by_id(&self, id: i64) -> impl std::future::Future<Output = Result<Option<User>>> + Send;

    /// Find a user by nickname (case-sensitive exact match).
    fn find_by_nickname(
        &self,
        nickname: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>>> + Send;

    /// Check whether a nickname is already taken (case-sensitive).
    fn nickname_exists(
        &self,
        nickname: &str,
    ) -> impl std::future::Future<Output = Result<bool>> + Send;
}

/// Capability interface for post storage.
pub trait PostStore {
    /// The post type used by this implementation.
    type Post;
    /// The new post type used by this implementation.
    type NewPost;
    /// The post update type used by this implementation.
    type PostUpdate;

    /// Insert a new post, returning the stored record.
    fn insert(
        &self,
        new_post: &Self::NewPost,
    ) -> impl std::future::Future<Output = Result<Self::Post>> + Send;

    /// Find a post by ID.
    fn find_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Self::Post>>> + Send;

    /// List a page of posts, newest first.
    fn list_page(
        &self,
        offset: i64,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Self::Post>>> + Send;

    /// Update a post by ID. Returns the updated post, or None if not found.
    fn update(
        &self,
        id: i64,
        update: &Self::PostUpdate,
    ) -> impl std::future::Future<Output = Result<Option<Self::Post>>> + Send;

    /// Delete a post and all comments referencing it, in one transaction.
    /// Returns true if the post existed.
    fn delete_cascade(&self, id: i64) -> impl std::future::Future<Output = Result<bool>> + Send;

    /// Delete a post whose stored guard password matches, cascading to its
    /// comments. Returns true if a matching post existed.
    fn delete_cascade_guarded(
        &self,
        id: i64,
        password: &str,
    ) -> impl std::future::Future<Output = Result<bool>> + Send;
}

/// Capability interface for comment storage.
pub trait CommentStore {
    /// The comment type used by this implementation.
    type Comment;
    /// The new comment type used by this implementation.
    type NewComment;

    /// Insert a new comment, returning the stored record.
    fn insert(
        &self,
        new_comment: &Self::NewComment,
    ) -> impl std::future::Future<Output = Result<Self::Comment>> + Send;

    /// Find a comment by ID.
    fn find_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Self::Comment>>> + Send;

    /// List comments for a post, newest first.
    fn list_by_post(
        &self,
        post_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Self::Comment>>> + Send;

    /// Replace a comment's text. Returns true if the comment existed.
    fn update_body(
        &self,
        id: i64,
        body: &str,
    ) -> impl std::future::Future<Output = Result<bool>> + Send;

    /// Delete a comment by ID. Returns true if a comment was deleted.
    fn delete(&self, id: i64) -> impl std::future::Future<Output = Result<bool>> + Send;
}
