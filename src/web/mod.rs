//! Web API module for Corkboard.
//!
//! This module provides the HTTP JSON API: routing, handlers, the cookie
//! token auth gate, and error mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
