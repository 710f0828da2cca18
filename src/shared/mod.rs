//! Shared Module
//!
//! This module contains types that are shared between the server and the
//! client. They are the JSON bodies exchanged over the REST API, so both
//! sides serialize and deserialize the exact same shapes.

/// Auth request and response bodies
pub mod auth;

/// Word response body
pub mod word;

/// Re-export commonly used types for convenience
pub use auth::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use word::WordResponse;
