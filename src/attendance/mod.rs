//! Attendance Module
//!
//! Attendance marking and report aggregation.
//!
//! # Module Structure
//!
//! ```text
//! attendance/
//! ├── mod.rs       - Module exports and documentation
//! ├── db.rs        - Attendance records and joined report queries
//! ├── reports.rs   - Grouping and percentage aggregation
//! ├── types.rs     - Request/response types and day/month validation
//! └── handlers.rs  - HTTP handlers
//! ```
//!
//! # Invariants
//!
//! - At most one record per (student, day), enforced by a unique constraint
//!   and upheld by marking as an upsert
//! - Records are created or updated, never deleted
//! - Status is one of `Present` or `Absent`

/// Attendance records and database operations
pub mod db;

/// Report aggregation
pub mod reports;

/// Request/response types and validation
pub mod types;

/// HTTP handlers for attendance endpoints
pub mod handlers;

pub use types::AttendanceStatus;
