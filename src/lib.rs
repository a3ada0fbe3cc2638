//! Rollcall - Main Library
//!
//! Rollcall is the backend for a student-attendance management system. It
//! exposes an HTTP+JSON API for teacher authentication, student roster
//! management, and attendance marking/reporting, backed by PostgreSQL.
//!
//! # Module Structure
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Accounts, JWT sessions, and authentication handlers
//! - **`roster`** - Student records and roll-number generation
//! - **`attendance`** - Attendance marking and report aggregation
//! - **`middleware`** - Bearer-token session guard
//! - **`error`** - API error taxonomy and HTTP conversion
//!
//! # State Management
//!
//! The application holds no authoritative in-memory state: every request
//! re-reads from storage through the shared `PgPool` in [`server::state::AppState`].
//! All coordination is delegated to the storage layer's uniqueness
//! constraints (unique roll numbers, one attendance record per student/day).

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication, JWT sessions, and account management
pub mod auth;

/// Student roster and roll-number generation
pub mod roster;

/// Attendance marking and reports
pub mod attendance;

/// Middleware for request processing
pub mod middleware;

/// API error types
pub mod error;

/// Re-export commonly used types
pub use error::ApiError;
pub use server::state::AppState;
