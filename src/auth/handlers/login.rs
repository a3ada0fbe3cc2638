/**
 * Login Handler
 *
 * This module implements the teacher authentication handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up account by username
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 * 4. Return token and account info
 *
 * # Security
 *
 * - Unknown username and wrong password return the same 400 response,
 *   so callers cannot enumerate accounts
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::accounts::get_account_by_username;
use crate::auth::handlers::types::{AccountResponse, AuthResponse, LoginRequest};
use crate::auth::sessions::create_token;
use crate::error::ApiError;

/// Login handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Json(request)` - Login request containing username and password
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields or invalid credentials
/// * `500 Internal Server Error` - Database query or token generation failed
pub async fn login(
    State(pool): State<PgPool>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if request.username.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("Username and password are required"));
    }

    tracing::info!("Login request for: {}", request.username);

    let account = get_account_by_username(&pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Account not found: {}", request.username);
            ApiError::validation("Invalid credentials")
        })?;

    // Verify password
    let valid = bcrypt::verify(&request.password, &account.password_hash)?;
    if !valid {
        tracing::warn!("Invalid password for account: {}", request.username);
        return Err(ApiError::validation("Invalid credentials"));
    }

    // Create token
    let token = create_token(account.id, account.username.clone()).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        ApiError::internal("Failed to create token")
    })?;

    tracing::info!("Teacher logged in successfully: {}", account.username);

    Ok(Json(AuthResponse {
        token,
        account: AccountResponse {
            id: account.id.to_string(),
            username: account.username,
        },
    }))
}
