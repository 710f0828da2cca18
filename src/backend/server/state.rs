/**
 * Application State Management
 *
 * `AppState` holds every collaborator a handler needs. It is built once at
 * startup and cloned per request; each field is cheap to clone.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers and middleware extract only the
 * part they use, e.g. `State<AuthService>` or `State<Arc<dyn WordStore>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::CredentialStore;
use crate::backend::words::db::WordStore;
use crate::backend::words::images::DiskImageStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Registration, login and identity lookup
    pub auth: AuthService,

    /// Token verification for the session middleware
    pub tokens: Arc<TokenService>,

    /// Per-user word list
    pub words: Arc<dyn WordStore>,

    /// Uploaded images
    pub images: DiskImageStore,
}

impl AppState {
    /// Assemble state from its collaborators
    ///
    /// The same token service backs both issuance (auth flow) and
    /// verification (middleware).
    pub fn new(
        users: Arc<dyn CredentialStore>,
        words: Arc<dyn WordStore>,
        tokens: TokenService,
        images: DiskImageStore,
        hash_cost: u32,
    ) -> Self {
        let tokens = Arc::new(tokens);

        Self {
            auth: AuthService::new(users, tokens.clone(), hash_cost),
            tokens,
            words,
            images,
        }
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<dyn WordStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.words.clone()
    }
}

impl FromRef<AppState> for DiskImageStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.images.clone()
    }
}
