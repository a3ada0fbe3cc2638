//! Roster Module
//!
//! Student records and the sequential roll-number generator.
//!
//! # Module Structure
//!
//! ```text
//! roster/
//! ├── mod.rs          - Module exports and documentation
//! ├── db.rs           - Student model and database operations
//! ├── roll_number.rs  - Sequential roll-number encoding
//! ├── types.rs        - Request/response types
//! └── handlers.rs     - HTTP handlers
//! ```
//!
//! # Invariants
//!
//! - Roll numbers are unique across the whole roster (unique index)
//! - Roll numbers are generated, never supplied or updated by callers
//! - Name, class, and section are mutable; the roll number is not

/// Student model and database operations
pub mod db;

/// Sequential roll-number generation
pub mod roll_number;

/// Request/response types
pub mod types;

/// HTTP handlers for roster endpoints
pub mod handlers;

pub use db::Student;
pub use roll_number::next_roll_number;
