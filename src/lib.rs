//! VocabCards - Main Library
//!
//! VocabCards is a small vocabulary-flashcard service: users register, log in,
//! upload word/image pairs and read back their own word list.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared between the server and the client
//!   - Register/login requests, auth responses, word responses
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server with JWT-based sessions
//!   - Credential and word stores (Postgres, in-memory)
//!   - Connection bootstrap with bounded retry
//!
//! - **`client`** - Client-side auth state
//!   - HTTP client for the auth endpoints
//!   - Durable token storage
//!   - Session context and navigation guard
//!
//! # Feature Flags
//!
//! - **`ssr`** - Server build (enabled by default). Pulls in axum, sqlx,
//!   bcrypt and jsonwebtoken.
//!
//! # Usage
//!
//! ```rust,no_run
//! use vocabcards::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// Client session state and navigation guard
pub mod client;
