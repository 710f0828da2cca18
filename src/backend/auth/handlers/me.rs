/**
 * Get Current User Handler
 *
 * GET /api/auth/me
 *
 * Mounted behind the session middleware, so the token has already been
 * verified when this runs. A missing or bad token never reaches it.
 *
 * # Example Response
 *
 * ```json
 * {"id": 1, "name": "Ana", "email": "ana@example.com"}
 * ```
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::service::AuthService;
use crate::backend::error::AppError;
use crate::backend::middleware::AuthUser;
use crate::shared::UserResponse;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - Missing or invalid token (from the middleware)
/// * `404 Not Found` - The token's user no longer exists
pub async fn get_me(
    AuthUser(user): AuthUser,
    State(auth): State<AuthService>,
) -> Result<Json<UserResponse>, AppError> {
    let profile = auth.current_user(user.user_id).await?;
    Ok(Json(profile))
}
