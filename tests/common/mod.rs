//! Common test utilities and helpers
//!
//! - In-memory application fixture driven through `axum-test`
//! - Authentication helpers for registering users and reading tokens

#![allow(dead_code)]

pub mod app;
pub mod auth_helpers;

pub use app::*;
pub use auth_helpers::*;
