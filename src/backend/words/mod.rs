//! Words Module
//!
//! A user's vocabulary list: word, translation and an uploaded image. Every
//! read and write is scoped to the identity resolved by the session
//! middleware.
//!
//! # Module Structure
//!
//! ```text
//! words/
//! ├── mod.rs        - Module exports and documentation
//! ├── db.rs         - Word record and `WordStore`
//! ├── images.rs     - Image files on local disk
//! └── handlers.rs   - POST/GET /api/words
//! ```

/// Word record and store
pub mod db;

/// Uploaded image storage
pub mod images;

/// HTTP handlers
pub mod handlers;

pub use db::{NewWord, Word, WordStore};
pub use handlers::{create_word, list_words};
pub use images::DiskImageStore;
