//! Word wire type.

use serde::{Deserialize, Serialize};

/// A stored word as returned by `/api/words`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordResponse {
    pub id: i64,
    pub word: String,
    pub translation: String,
    /// File name of the stored image, served under `/uploads/`
    pub image_url: String,
}
