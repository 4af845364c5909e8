//! API handlers for the Web API.

pub mod auth;
pub mod comments;
pub mod posts;

pub use auth::*;
pub use comments::*;
pub use posts::*;

use crate::auth::TokenIssuer;
use crate::config::{AuthConfig, PostAuthMode};
use crate::Database;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle (pool, initialized once at startup).
    pub db: Database,
    /// Token issuer built from the signing secret.
    pub tokens: TokenIssuer,
    /// Name of the cookie carrying the token.
    pub cookie_name: String,
    /// Authorization mode for post mutation.
    pub post_auth: PostAuthMode,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, auth: &AuthConfig) -> Self {
        Self {
            db,
            tokens: TokenIssuer::new(&auth.jwt_secret, auth.token_expiry_secs),
            cookie_name: auth.cookie_name.clone(),
            post_auth: auth.post_auth,
        }
    }
}
