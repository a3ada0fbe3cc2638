/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is deliberately thin: the application holds no authoritative
 * in-memory state, so the only shared resource is the PostgreSQL
 * connection pool. Every request re-reads from storage.
 *
 * # State Extraction
 *
 * The `FromRef` implementation allows handlers to extract a `PgPool`
 * directly with `State(pool)` instead of taking the entire `AppState`.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

/// Application state shared across all request handlers
///
/// # Thread Safety
///
/// `PgPool` is internally reference-counted and safe to clone per request.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    ///
    /// Required: every endpoint is a read or write against storage.
    pub db: PgPool,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

/// Allow handlers to extract the pool directly from `AppState`
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}
