//! Authentication Module
//!
//! This module handles registration, login and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User record and credential store
//! ├── sessions.rs     - JWT issuance and verification
//! ├── service.rs      - Registration / login / identity lookup
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email, password → user created → token returned
//! 2. **Login**: email, password → credentials verified → token returned
//! 3. **Me**: token → verified by the session middleware → profile returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 10) before storage
//! - Tokens are HS256 JWTs, valid for 24 hours, subject = user ID
//! - Login failures never reveal whether the email exists
//! - Logout is client-side only; there is no revocation list

/// User record and credential store
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Auth flow
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use service::AuthService;
pub use sessions::{TokenError, TokenService};
pub use users::{CredentialStore, StoreError, User};
