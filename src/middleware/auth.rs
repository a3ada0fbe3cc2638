/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require a
 * signed-in teacher. It extracts and verifies JWT tokens from the
 * Authorization header and attaches the resolved account to the request.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::accounts::get_account_by_id;
use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated account data extracted from the JWT token
#[derive(Clone, Debug)]
pub struct CurrentAccount {
    pub account_id: Uuid,
    pub username: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Re-resolves the account against the database
/// 4. Attaches the account to request extensions for use in handlers
///
/// Returns 401 Unauthorized if the token is missing, malformed, expired,
/// or the account no longer exists. No storage is mutated on rejection.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::unauthenticated("No token provided, authorization denied")
        })?;

    // Extract token (format: "Bearer <token>")
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::unauthenticated("No token provided, authorization denied")
    })?;

    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ApiError::unauthenticated("Token is not valid")
    })?;

    let account_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| ApiError::unauthenticated("Token is not valid"))?;

    // The account must still exist; a token outliving its account is invalid
    let account = get_account_by_id(&app_state.db, account_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Account from token not found: {account_id}");
            ApiError::unauthenticated("Token is not valid - teacher not found")
        })?;

    request.extensions_mut().insert(CurrentAccount {
        account_id: account.id,
        username: account.username,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated account
///
/// Handlers can take `AuthAccount` as a parameter to access the account
/// resolved by [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthAccount(pub CurrentAccount);

impl axum::extract::FromRequestParts<AppState> for AuthAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let account = parts
            .extensions
            .get::<CurrentAccount>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("CurrentAccount not found in request extensions");
                ApiError::unauthenticated("No token provided, authorization denied")
            })?;

        Ok(AuthAccount(account))
    }
}
