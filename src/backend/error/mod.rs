//! Backend Error Module
//!
//! This module defines the error taxonomy of the backend server.
//! These errors are returned from handlers and converted to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and From implementations
//! ```
//!
//! # Error Types
//!
//! | Variant              | Status | Meaning                                   |
//! |----------------------|--------|-------------------------------------------|
//! | `Validation`         | 400    | Malformed input                           |
//! | `Conflict`           | 400    | Email already registered                  |
//! | `InvalidCredentials` | 400    | Unknown email or wrong password           |
//! | `Unauthorized`       | 401    | Missing, invalid or expired token         |
//! | `NotFound`           | 404    | Token valid but subject no longer exists  |
//! | `Internal`           | 500    | Storage or unexpected failure             |
//!
//! # HTTP Response Conversion
//!
//! `AppError` implements `IntoResponse` from Axum. The body is always
//! `{"error": <message>, "status": <code>}`. Internal errors are logged with
//! full detail and the client only sees a generic message.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AppError;
