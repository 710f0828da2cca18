//! Client Module
//!
//! Client-side session state for VocabCards front ends.
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs        - Module exports and documentation
//! ├── config.rs     - API base URL
//! ├── api.rs        - `AuthApi` and its reqwest implementation
//! ├── storage.rs    - Durable token storage
//! ├── session.rs    - `SessionContext`, the reactive session store
//! └── router.rs     - Routes and the navigation guard
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use vocabcards::client::{
//!     ClientConfig, FileTokenStorage, HttpAuthApi, Navigation, Route, SessionContext,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = HttpAuthApi::new(ClientConfig::from_env());
//! let storage = FileTokenStorage::default_location().ok_or("no config directory")?;
//! let session = SessionContext::new(api, storage);
//!
//! session.check_auth().await;
//! if session.navigate(Route::Words) == Navigation::Redirect(Route::Login) {
//!     session.login("ana@example.com", "secret1").await?;
//! }
//! # Ok(())
//! # }
//! ```

/// Client configuration
pub mod config;

/// Auth API client
pub mod api;

/// Token persistence
pub mod storage;

/// Session context
pub mod session;

/// Route table and guard
pub mod router;

pub use api::{AuthApi, ClientError, HttpAuthApi};
pub use config::ClientConfig;
pub use router::{guard, Navigation, Route, RouteMeta};
pub use session::{SessionContext, SessionState};
pub use storage::{FileTokenStorage, MemoryTokenStorage, TokenStorage, TOKEN_STORAGE_KEY};
