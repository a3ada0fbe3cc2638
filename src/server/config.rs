/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration,
 * focusing on the PostgreSQL connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables. Unlike optional
 * services, the database is required: every endpoint of this API is a
 * read or write against storage, so a missing or unreachable database
 * fails startup instead of degrading.
 */

use sqlx::PgPool;

use crate::error::ApiError;

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs embedded schema migrations
///
/// # Returns
///
/// The connected pool, or an error if `DATABASE_URL` is missing, the
/// connection fails, or migrations cannot be applied.
pub async fn load_database() -> Result<PgPool, ApiError> {
    let database_url = std::env::var("DATABASE_URL").map_err(|_| {
        ApiError::internal("DATABASE_URL is not set; the attendance API requires PostgreSQL")
    })?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to run database migrations: {e}")))?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
