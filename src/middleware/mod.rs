//! Middleware Module
//!
//! Request-processing middleware. Currently holds the bearer-token
//! session guard applied to all roster and attendance routes.

/// Bearer-token session guard
pub mod auth;

pub use auth::{auth_middleware, AuthAccount, CurrentAccount};
