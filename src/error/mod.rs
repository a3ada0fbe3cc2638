//! API Error Module
//!
//! This module defines the error taxonomy used by all HTTP handlers and
//! its conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Taxonomy
//!
//! - `Validation` - missing/malformed fields → 400
//! - `Unauthenticated` - missing/invalid/expired token → 401
//! - `NotFound` - missing entity by id → 404
//! - `Conflict` - uniqueness violation not absorbed by upsert logic → 400
//! - anything else → 500 with a generic message
//!
//! All errors implement `IntoResponse` and can be returned directly from
//! handlers via the `?` operator.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
