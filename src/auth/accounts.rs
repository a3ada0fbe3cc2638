/**
 * Account Model and Database Operations
 *
 * This module handles teacher account data and database operations,
 * including the idempotent default-account seeding run at startup.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::ApiError;

/// Username of the account seeded at startup
pub const DEFAULT_USERNAME: &str = "admin";

/// Initial password of the seeded account; expected to be rotated
const DEFAULT_PASSWORD: &str = "admin1";

/// Account struct representing a teacher in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    /// Unique account ID (UUID)
    pub id: uuid::Uuid,
    /// Username (unique)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Get account by username
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - Username
///
/// # Returns
/// Account or None if not found
pub async fn get_account_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<Account>, sqlx::Error> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, username, password_hash, created_at
        FROM accounts
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

/// Get account by ID
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `id` - Account ID
///
/// # Returns
/// Account or None if not found
pub async fn get_account_by_id(
    pool: &PgPool,
    id: uuid::Uuid,
) -> Result<Option<Account>, sqlx::Error> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, username, password_hash, created_at
        FROM accounts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

/// Seed the default teacher account if it does not exist
///
/// Runs once at process initialization. The existence check plus
/// `ON CONFLICT DO NOTHING` makes the step idempotent, including across
/// concurrently starting processes.
///
/// # Arguments
/// * `pool` - Database connection pool
pub async fn seed_default_account(pool: &PgPool) -> Result<(), ApiError> {
    if get_account_by_username(pool, DEFAULT_USERNAME).await?.is_some() {
        tracing::debug!("Default account already present, skipping seed");
        return Ok(());
    }

    let password_hash = bcrypt::hash(DEFAULT_PASSWORD, bcrypt::DEFAULT_COST)?;

    sqlx::query(
        r#"
        INSERT INTO accounts (id, username, password_hash, created_at)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (username) DO NOTHING
        "#,
    )
    .bind(uuid::Uuid::new_v4())
    .bind(DEFAULT_USERNAME)
    .bind(&password_hash)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    tracing::info!("Default teacher account created");
    Ok(())
}
