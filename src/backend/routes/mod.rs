//! Route Configuration Module
//!
//! Assembles every HTTP route of the backend into one router.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! └── router.rs       - Router assembly
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vocabcards::backend::auth::TokenService;
//! use vocabcards::backend::db::MemoryStore;
//! use vocabcards::backend::routes::create_router;
//! use vocabcards::backend::server::AppState;
//! use vocabcards::backend::words::DiskImageStore;
//!
//! let store = Arc::new(MemoryStore::new());
//! let tokens = TokenService::new("dev-secret").unwrap();
//! let state = AppState::new(store.clone(), store, tokens, DiskImageStore::new("uploads"), 10);
//! let router = create_router(state);
//! ```

/// Main router creation
pub mod router;

pub use router::create_router;
