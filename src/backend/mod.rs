//! Backend Module
//!
//! This module contains all server-side code for VocabCards. It provides an
//! Axum HTTP server with JWT-based sessions over a Postgres connection pool.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, state, app creation
//! - **`db`** - Store backends and connection bootstrap
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential store, token service, auth flow and handlers
//! - **`words`** - Word store, image storage and handlers
//! - **`middleware`** - Session middleware guarding per-user routes
//! - **`error`** - Backend error taxonomy and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Config, state, init
//! ├── db/             - Postgres and in-memory stores, connection retry
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── words/          - Word list
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! 1. Client submits credentials to `/api/auth/register` or `/api/auth/login`
//! 2. The auth flow validates input, talks to the credential store and issues a token
//! 3. The client sends `Authorization: Bearer <token>` on later requests
//! 4. The session middleware verifies the token before any protected handler runs
//! 5. Protected handlers scope every query by the verified subject
//!
//! # Thread Safety
//!
//! The only shared state touched per request is the connection pool (or the
//! in-memory store in tests), both safe for concurrent use. Password hashing
//! runs on the blocking thread pool so it never stalls request processing.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Persistence backends and connection bootstrap
pub mod db;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Word list storage and handlers
pub mod words;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::AppError;
pub use server::{create_app, AppState};
