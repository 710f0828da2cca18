/**
 * Authentication Wire Types
 *
 * Request and response bodies for `/api/auth/register`, `/api/auth/login`
 * and `/api/auth/me`. The server produces them and the client consumes them.
 */

use serde::{Deserialize, Serialize};

/// Registration request
///
/// Fields default to empty strings when absent so that a missing field is
/// reported as a validation error rather than a JSON rejection.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RegisterRequest {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Email address, used as the login key
    #[serde(default)]
    pub email: String,
    /// Plaintext password (hashed before storage)
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Auth response
///
/// Returned by register and login. Carries the session token and the
/// public part of the user record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    /// Signed session token (24-hour expiry)
    pub token: String,
    pub user: UserResponse,
}

/// User profile without the password hash
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}
