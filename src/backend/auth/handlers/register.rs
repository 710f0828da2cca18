/**
 * Register Handler
 *
 * POST /api/auth/register
 *
 * # Example Request
 *
 * ```http
 * POST /api/auth/register HTTP/1.1
 * Content-Type: application/json
 *
 * {"name": "Ana", "email": "ana@example.com", "password": "secret1"}
 * ```
 *
 * # Example Response
 *
 * ```json
 * {
 *   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
 *   "user": {"id": 1, "name": "Ana", "email": "ana@example.com"}
 * }
 * ```
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::service::AuthService;
use crate::backend::error::AppError;
use crate::shared::{AuthResponse, RegisterRequest};

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields, short password, or email already in use
/// * `500 Internal Server Error` - Hashing, storage or signing failure
pub async fn register(
    State(auth): State<AuthService>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AppError> {
    let Json(request) = payload?;
    tracing::info!("Register request for email: {}", request.email);

    let response = auth.register(request).await?;

    Ok(Json(response))
}
