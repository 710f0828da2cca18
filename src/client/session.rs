/**
 * Client Session
 *
 * Mirrors the server session on the client: the current token and the
 * profile it belongs to. State lives in a `watch` channel so views can
 * subscribe and re-render on change.
 *
 * # Lifecycle
 *
 * - `new` restores a persisted token (no profile yet)
 * - `login` / `register` persist the returned token, then fetch the profile
 * - `check_auth` fetches the profile for a restored token
 * - `logout` forgets token and profile locally; the server is not told
 *
 * A failed profile fetch is treated as a logout.
 *
 * Overlapping `login`/`register` calls are not serialized; the last one to
 * finish wins.
 */

use tokio::sync::watch;

use crate::client::api::{AuthApi, ClientError};
use crate::client::router::{guard, Navigation, Route};
use crate::client::storage::TokenStorage;
use crate::shared::{LoginRequest, RegisterRequest, UserResponse};

const LOGIN_FAILED: &str = "Failed to login";
const REGISTER_FAILED: &str = "Failed to register";

/// Snapshot of the client session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserResponse>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    /// Token and profile both present
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// Session context shared by the client's views
pub struct SessionContext<A, S> {
    api: A,
    storage: S,
    state: watch::Sender<SessionState>,
}

impl<A, S> SessionContext<A, S>
where
    A: AuthApi,
    S: TokenStorage,
{
    /// Create a context, restoring any persisted token
    pub fn new(api: A, storage: S) -> Self {
        let token = storage.load().unwrap_or_else(|e| {
            tracing::warn!("Could not read stored token: {}", e);
            None
        });

        let (state, _) = watch::channel(SessionState {
            token,
            ..SessionState::default()
        });

        Self {
            api,
            storage,
            state,
        }
    }

    /// Current session snapshot
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every session change
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn user(&self) -> Option<UserResponse> {
        self.state.borrow().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    /// Log in and load the profile
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ClientError> {
        self.begin();

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let result = match self.api.login(&request).await {
            Ok(response) => {
                self.open(response.token);
                self.load_user().await;
                Ok(())
            }
            Err(e) => {
                self.fail(&e, LOGIN_FAILED);
                Err(e)
            }
        };

        self.finish();
        result
    }

    /// Register and load the profile
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), ClientError> {
        self.begin();

        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        let result = match self.api.register(&request).await {
            Ok(response) => {
                self.open(response.token);
                self.load_user().await;
                Ok(())
            }
            Err(e) => {
                self.fail(&e, REGISTER_FAILED);
                Err(e)
            }
        };

        self.finish();
        result
    }

    /// Forget the session locally
    pub fn logout(&self) {
        if let Err(e) = self.storage.clear() {
            tracing::warn!("Could not clear stored token: {}", e);
        }

        self.state.send_modify(|state| {
            state.token = None;
            state.user = None;
        });
    }

    /// Fetch the profile if there is a token but no profile yet
    ///
    /// Any failure logs the session out.
    pub async fn load_user(&self) {
        let token = {
            let state = self.state.borrow();
            match (&state.token, &state.user) {
                (Some(token), None) => token.clone(),
                _ => return,
            }
        };

        match self.api.me(&token).await {
            Ok(user) => self.state.send_modify(|state| {
                if state.token.as_deref() == Some(token.as_str()) {
                    state.user = Some(user);
                }
            }),
            Err(e) => {
                tracing::info!("Stored session rejected, logging out: {}", e);
                self.logout();
            }
        }
    }

    /// Resolve a restored token into a profile
    pub async fn check_auth(&self) {
        if self.state.borrow().token.is_some() {
            self.load_user().await;
        }
    }

    /// Navigation guard against the current session
    pub fn navigate(&self, route: Route) -> Navigation {
        guard(route, self.is_authenticated())
    }

    fn begin(&self) {
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });
    }

    fn finish(&self) {
        self.state.send_modify(|state| state.loading = false);
    }

    fn open(&self, token: String) {
        if let Err(e) = self.storage.save(&token) {
            tracing::warn!("Could not persist token: {}", e);
        }

        self.state.send_modify(|state| {
            state.token = Some(token);
            state.user = None;
        });
    }

    fn fail(&self, error: &ClientError, fallback: &str) {
        let message = error.server_message().unwrap_or(fallback).to_string();
        self.state.send_modify(|state| state.error = Some(message));
    }
}
