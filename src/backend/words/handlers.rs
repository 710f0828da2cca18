/**
 * Word Handlers
 *
 * - `POST /api/words` - multipart upload of `word`, `translation`, `image`
 * - `GET /api/words` - the caller's words
 *
 * Both run behind the session middleware. The owner is always the
 * authenticated user; a `user_id` sent by the client is ignored.
 */

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    response::Json,
};

use crate::backend::error::AppError;
use crate::backend::middleware::AuthUser;
use crate::backend::words::db::{NewWord, WordStore};
use crate::backend::words::images::DiskImageStore;
use crate::shared::WordResponse;

/// Maximum accepted request body for uploads
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

struct UploadedImage {
    file_name: Option<String>,
    bytes: Vec<u8>,
}

/// Create word handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing `word`, `translation` or `image`, or a malformed body
/// * `401 Unauthorized` - Missing or invalid token (from the middleware)
/// * `500 Internal Server Error` - Image or database write failed
pub async fn create_word(
    AuthUser(user): AuthUser,
    State(words): State<Arc<dyn WordStore>>,
    State(images): State<DiskImageStore>,
    mut multipart: Multipart,
) -> Result<Json<WordResponse>, AppError> {
    let mut word = None;
    let mut translation = None;
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("word") => word = Some(field.text().await?),
            Some("translation") => translation = Some(field.text().await?),
            Some("image") => {
                let file_name = field.file_name().map(str::to_owned);
                let bytes = field.bytes().await?;
                image = Some(UploadedImage {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    let (Some(word), Some(translation), Some(image)) = (
        word.filter(|w| !w.trim().is_empty()),
        translation.filter(|t| !t.trim().is_empty()),
        image.filter(|i| !i.bytes.is_empty()),
    ) else {
        return Err(AppError::validation(
            "word, translation and image are required",
        ));
    };

    let image_url = images
        .save(image.file_name.as_deref(), &image.bytes)
        .await
        .map_err(|e| AppError::internal(format!("failed to store image: {e}")))?;

    let created = match words
        .create_word(
            user.user_id,
            NewWord {
                word: word.trim().to_string(),
                translation: translation.trim().to_string(),
                image_url: image_url.clone(),
            },
        )
        .await
    {
        Ok(created) => created,
        Err(e) => {
            // No row references the file.
            if let Err(remove_err) = images.remove(&image_url).await {
                tracing::warn!("Failed to remove orphaned image {}: {}", image_url, remove_err);
            }
            return Err(e.into());
        }
    };

    tracing::info!("Word {} created for user {}", created.id, user.user_id);

    Ok(Json(created.to_response()))
}

/// List words handler
///
/// # Errors
///
/// * `401 Unauthorized` - Missing or invalid token (from the middleware)
/// * `500 Internal Server Error` - Database read failed
pub async fn list_words(
    AuthUser(user): AuthUser,
    State(words): State<Arc<dyn WordStore>>,
) -> Result<Json<Vec<WordResponse>>, AppError> {
    let words = words.list_words(user.user_id).await?;
    Ok(Json(words.iter().map(|w| w.to_response()).collect()))
}
