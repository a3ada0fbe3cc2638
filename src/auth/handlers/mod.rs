//! Authentication Handlers
//!
//! HTTP handlers for the authentication endpoints:
//!
//! - `POST /api/auth/login` - Teacher login
//! - `POST /api/auth/verify` - Token validity check for the front end

/// Request/response types
pub mod types;

/// Login handler
pub mod login;

/// Token verification handler
pub mod verify;

pub use login::login;
pub use verify::verify;
