/**
 * Session Middleware
 *
 * Guards every route that touches per-user data. It extracts the bearer
 * token from the `Authorization` header, verifies it, and attaches the
 * resolved identity to the request extensions. Any failure answers 401 and
 * the handler never runs.
 *
 * Handlers read the identity through the `AuthUser` extractor and must
 * scope their queries by it, never by a user ID taken from the body.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::AppError;

/// Identity resolved from a verified token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

/// Extract the token from `Authorization: Bearer <token>`
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            AppError::unauthorized("token not provided")
        })?
        .to_str()
        .map_err(|_| AppError::unauthorized("invalid authorization header"))?;

    let (scheme, token) = header.split_once(' ').ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        AppError::unauthorized("invalid authorization header")
    })?;

    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        tracing::warn!("Invalid Authorization header format");
        return Err(AppError::unauthorized("invalid authorization header"));
    }

    Ok(token)
}

/// Authentication middleware
///
/// 1. Extracts the bearer token
/// 2. Verifies signature and expiry
/// 3. Attaches `AuthenticatedUser` to the request extensions
///
/// Returns 401 Unauthorized if the token is missing, malformed, invalid or
/// expired.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user_id = {
        let token = bearer_token(request.headers())?;
        tokens.verify(token).map_err(|e| {
            tracing::warn!("Rejected token: {}", e);
            AppError::from(e)
        })?
    };

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only usable on routes behind `auth_middleware`; elsewhere it rejects
/// with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                AppError::unauthorized("authentication required")
            })?;

        Ok(AuthUser(user))
    }
}
