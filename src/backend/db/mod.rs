//! Database Module
//!
//! Storage backends and the startup connection bootstrap.
//!
//! # Module Structure
//!
//! ```text
//! db/
//! ├── mod.rs        - Module exports and documentation
//! ├── postgres.rs   - `PgStore`, the production store over a `PgPool`
//! ├── memory.rs     - `MemoryStore`, an in-process store for tests and local runs
//! └── bootstrap.rs  - Pool creation with bounded retry
//! ```
//!
//! The store traits themselves live next to the data they describe
//! (`auth::users::CredentialStore`, `words::db::WordStore`); both structs
//! here implement both traits.

/// Postgres-backed store
pub mod postgres;

/// In-memory store
pub mod memory;

/// Connection pool bootstrap with retry
pub mod bootstrap;

pub use bootstrap::{connect_with_retry, BootstrapError, RetryPolicy};
pub use memory::MemoryStore;
pub use postgres::PgStore;
