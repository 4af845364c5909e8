//! Middleware for the Web API.

pub mod auth;
pub mod cors;

pub use auth::{auth_context, AuthState, AuthUser};
pub use cors::create_cors_layer;
