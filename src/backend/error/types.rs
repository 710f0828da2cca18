/**
 * Backend Error Types
 *
 * This module defines the errors a request can end in. Each variant maps to
 * exactly one HTTP status code and carries the user-facing message.
 *
 * # Error Categories
 *
 * ## Input Errors
 *
 * - Missing or empty registration fields
 * - Password shorter than the minimum length
 * - Duplicate email
 *
 * ## Session Errors
 *
 * - Missing or malformed `Authorization` header
 * - Token with a bad signature or past its expiry
 *
 * ## Internal Errors
 *
 * - Database failures, hashing failures, file system failures
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Message returned for both "no such email" and "wrong password"
pub const INVALID_CREDENTIALS_MESSAGE: &str = "invalid email or password";

/// Message returned when an email is already registered
pub const EMAIL_IN_USE_MESSAGE: &str = "email already in use";

/// Message returned in place of any internal error detail
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend error taxonomy
///
/// # Usage
///
/// ```rust
/// use vocabcards::backend::error::AppError;
///
/// let err = AppError::validation("all fields are required");
/// assert_eq!(err.status_code().as_u16(), 400);
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed input
    #[error("{0}")]
    Validation(String),

    /// Uniqueness violation (duplicate email)
    #[error("{0}")]
    Conflict(String),

    /// Unknown email or wrong password, deliberately indistinguishable
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,

    /// Missing, malformed, invalid or expired token
    #[error("{0}")]
    Unauthorized(String),

    /// Valid token whose subject no longer exists
    #[error("{0}")]
    NotFound(String),

    /// Storage or unexpected failure
    ///
    /// The detail is logged server-side and never sent to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// Conflicts and invalid credentials answer 400, as the public API
    /// has always done.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) | Self::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message that is safe to show to the client
    pub fn public_message(&self) -> String {
        match self {
            Self::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(AppError::validation("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::conflict("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidCredentials.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::unauthorized("x").status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let error = AppError::internal("relation \"users\" does not exist");
        assert_eq!(error.public_message(), INTERNAL_ERROR_MESSAGE);
        assert!(error.to_string().contains("relation"));
    }

    #[test]
    fn test_invalid_credentials_message() {
        assert_eq!(
            AppError::InvalidCredentials.public_message(),
            INVALID_CREDENTIALS_MESSAGE
        );
    }
}
