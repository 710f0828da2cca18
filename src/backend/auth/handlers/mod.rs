//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints. Each handler extracts its
//! input, delegates to `AuthService` and returns JSON.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs        - Handler exports
//! ├── register.rs   - POST /api/auth/register
//! ├── login.rs      - POST /api/auth/login
//! └── me.rs         - GET /api/auth/me (behind the session middleware)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{routing::{get, post}, Router};
//! use vocabcards::backend::AppState;
//! use vocabcards::backend::auth::handlers::{get_me, login, register};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/api/auth/register", post(register))
//!     .route("/api/auth/login", post(login))
//!     .route("/api/auth/me", get(get_me));
//! ```

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use login::login;
pub use me::get_me;
pub use register::register;
