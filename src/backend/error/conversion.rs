/**
 * Error Conversion
 *
 * Converts backend errors into HTTP responses and lifts lower-level errors
 * (store, token, request body) into `AppError`.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection},
    response::{IntoResponse, Json, Response},
};

use crate::backend::auth::sessions::TokenError;
use crate::backend::auth::users::StoreError;
use crate::backend::error::types::{AppError, EMAIL_IN_USE_MESSAGE};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let Self::Internal(detail) = &self {
            tracing::error!("Internal error: {}", detail);
        }

        let body = serde_json::json!({
            "error": self.public_message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => Self::conflict(EMAIL_IN_USE_MESSAGE),
            StoreError::Database(e) => Self::internal(format!("database error: {e:?}")),
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::MissingSecret => Self::internal("token signing secret is not configured"),
            TokenError::Invalid => Self::unauthorized("invalid token"),
            TokenError::Expired => Self::unauthorized("token expired"),
            TokenError::Encode(e) => Self::internal(format!("failed to sign token: {e:?}")),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        Self::validation(format!("invalid request body: {}", err.body_text()))
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        Self::validation(format!("invalid multipart body: {}", err.body_text()))
    }
}
