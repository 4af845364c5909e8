//! Corkboard - a bulletin board backend.
//!
//! Users, posts, and comments over an HTTP JSON API with cookie-based
//! token authentication.

pub mod auth;
pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use auth::{
    hash_password, verify_password, PasswordError, TokenClaims, TokenError, TokenIssuer,
    TokenVerifier, ValidationError,
};
pub use config::{Config, PostAuthMode};
pub use db::{Database, NewUser, User, UserRepository};
pub use error::{CorkboardError, Result};
pub use web::{ApiError, WebServer};
