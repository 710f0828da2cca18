/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * Unknown email and wrong password both answer
 * `400 {"error": "invalid email or password"}`.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::service::AuthService;
use crate::backend::error::AppError;
use crate::shared::{AuthResponse, LoginRequest};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Invalid credentials
/// * `500 Internal Server Error` - Storage or signing failure
pub async fn login(
    State(auth): State<AuthService>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AppError> {
    let Json(request) = payload?;
    tracing::info!("Login request for: {}", request.email);

    let response = auth.login(request).await?;

    Ok(Json(response))
}
