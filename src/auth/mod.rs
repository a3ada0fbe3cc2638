//! Authentication Module
//!
//! This module handles teacher authentication and session management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── accounts.rs     - Account model and database operations
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── login.rs    - Login handler
//!     └── verify.rs   - Token verification handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: username and password verified → JWT token returned
//! 2. **Verify**: token checked against signature, expiry, and the
//!    accounts table
//! 3. **Guard**: every protected route resolves the bearer token through
//!    the middleware in [`crate::middleware::auth`]
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens expire after 7 days
//! - Bad credentials return a single undifferentiated message

/// Account model and database operations
pub mod accounts;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AccountResponse, AuthResponse, LoginRequest, VerifyRequest, VerifyResponse};
pub use handlers::{login, verify};
