//! Server Module
//!
//! Configuration loading, application state and app creation for the Axum
//! HTTP server.
//!
//! - **`config`** - Environment-driven `ServerConfig`
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - Startup sequence and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Configuration loading
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Secret check**: a missing signing secret aborts startup
//! 2. **Database**: connect with retry, then run migrations
//! 3. **Uploads**: create the upload directory
//! 4. **Router**: build state and mount every route
//!
//! # Example
//!
//! ```rust,no_run
//! use vocabcards::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, StartupError};
pub use state::AppState;
