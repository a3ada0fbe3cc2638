//! Server Module
//!
//! This module handles the initialization and configuration of the Axum
//! HTTP server: database connection, schema migrations, default-account
//! seeding, and application state.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs     - Module exports and documentation
//! ├── init.rs    - Application assembly (pool, seeding, router)
//! ├── state.rs   - Shared application state
//! └── config.rs  - Environment-based configuration
//! ```

/// Application assembly
pub mod init;

/// Shared application state
pub mod state;

/// Environment-based configuration
pub mod config;

pub use init::create_app;
pub use state::AppState;
