//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Session middleware for protecting per-user routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use vocabcards::backend::AppState;
//! use vocabcards::backend::middleware::auth_middleware;
//!
//! fn protect(router: Router<AppState>, state: AppState) -> Router<AppState> {
//!     router.route_layer(middleware::from_fn_with_state(state, auth_middleware))
//! }
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
