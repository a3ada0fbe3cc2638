/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers. Wire names are camelCase to match the
 * existing browser front end.
 */

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Teacher's username
    pub username: String,
    /// Teacher's password (verified against the stored bcrypt hash)
    pub password: String,
}

/// Token verification request
#[derive(Deserialize, Serialize, Debug)]
pub struct VerifyRequest {
    /// JWT token to check
    pub token: String,
}

/// Auth response returned by the login handler
#[derive(Serialize, Debug)]
pub struct AuthResponse {
    /// JWT token for authentication (7-day expiration)
    pub token: String,
    /// Account information (without sensitive data)
    pub account: AccountResponse,
}

/// Token verification response
///
/// Every outcome carries `valid`; the front end branches on it. Success
/// adds the resolved account, failure adds a message instead.
#[derive(Serialize, Debug)]
pub struct VerifyResponse {
    /// Whether the token passed signature, expiry, and account checks
    pub valid: bool,
    /// The resolved account (present only when valid)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountResponse>,
    /// Failure reason (present only when invalid)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VerifyResponse {
    pub fn success(account: AccountResponse) -> Self {
        Self {
            valid: true,
            account: Some(account),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            account: None,
            message: Some(message.into()),
        }
    }
}

/// Account response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AccountResponse {
    /// Account's unique ID (UUID)
    pub id: String,
    /// Account's username
    pub username: String,
}
