/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, default-account seeding, and route
 * configuration.
 *
 * # Initialization Process
 *
 * 1. Connect the PostgreSQL pool and run migrations
 * 2. Seed the default teacher account if absent (idempotent)
 * 3. Create and configure the router
 *
 * Seeding is an explicit startup step rather than a side effect of module
 * loading, guarded by an existence check inside the insert itself.
 */

use axum::Router;

use crate::auth::accounts::seed_default_account;
use crate::error::ApiError;
use crate::routes::router::create_router;
use crate::server::config::load_database;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests, or an error if the
/// database cannot be reached or seeded.
pub async fn create_app() -> Result<Router<()>, ApiError> {
    tracing::info!("Initializing Rollcall backend server");

    // Step 1: Connect the database and apply migrations
    let pool = load_database().await?;

    // Step 2: Seed the default account (admin) once, idempotently
    seed_default_account(&pool).await?;

    // Step 3: Create app state and router
    let app_state = AppState::new(pool);
    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}
