/**
 * Auth Flow
 *
 * Registration, login and identity lookup. Handlers are thin wrappers over
 * `AuthService`; every rule about input, uniqueness and passwords lives here.
 *
 * # Registration
 *
 * 1. Reject missing or empty name/email/password
 * 2. Reject passwords shorter than 6 characters
 * 3. Reject an email that is already registered
 * 4. Hash the password with bcrypt (random salt)
 * 5. Create the user record
 * 6. Issue a token for the new user ID
 *
 * Steps 1 and 2 never touch the store.
 *
 * # Login
 *
 * An unknown email and a wrong password produce the same error and message,
 * so the response does not reveal which accounts exist.
 *
 * # Blocking Work
 *
 * bcrypt is CPU-bound; hashing and verification run on the blocking thread
 * pool via `tokio::task::spawn_blocking`.
 */

use std::sync::Arc;

use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{CredentialStore, User};
use crate::backend::error::types::{AppError, EMAIL_IN_USE_MESSAGE};
use crate::shared::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// bcrypt cost used in production (2^10 rounds)
pub const DEFAULT_HASH_COST: u32 = 10;

/// Orchestrates registration, login and identity lookup
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    tokens: Arc<TokenService>,
    hash_cost: u32,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>, tokens: Arc<TokenService>, hash_cost: u32) -> Self {
        Self {
            store,
            tokens,
            hash_cost,
        }
    }

    pub fn tokens(&self) -> &Arc<TokenService> {
        &self.tokens
    }

    /// Register a new user and open a session for them
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AppError> {
        validate_registration(&request)?;

        let RegisterRequest {
            name,
            email,
            password,
        } = request;
        let name = name.trim().to_string();
        let email = email.trim().to_string();

        if self.store.find_by_email(&email).await?.is_some() {
            tracing::warn!("Email already exists: {}", email);
            return Err(AppError::conflict(EMAIL_IN_USE_MESSAGE));
        }

        let password_hash = hash_password(password, self.hash_cost).await?;

        // A concurrent registration can still win between the lookup and
        // the insert; the store reports that as DuplicateEmail.
        let user = self.store.create(&name, &email, &password_hash).await?;

        tracing::info!("User registered: id={} email={}", user.id, user.email);

        self.open_session(&user)
    }

    /// Verify credentials and open a session
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        let email = request.email.trim();

        if email.is_empty() || request.password.is_empty() {
            return Err(AppError::InvalidCredentials);
        }

        let Some(user) = self.store.find_by_email(email).await? else {
            tracing::warn!("Login failed: unknown email {}", email);
            return Err(AppError::InvalidCredentials);
        };

        let valid = verify_password(request.password, user.password_hash.clone()).await?;
        if !valid {
            tracing::warn!("Login failed: wrong password for user {}", user.id);
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!("User logged in: id={} email={}", user.id, user.email);

        self.open_session(&user)
    }

    /// Profile of the user named by a verified token subject
    pub async fn current_user(&self, user_id: i64) -> Result<UserResponse, AppError> {
        let user = self.store.find_by_id(user_id).await?.ok_or_else(|| {
            tracing::warn!("Token subject no longer exists: {}", user_id);
            AppError::not_found("user not found")
        })?;

        Ok(user.to_response())
    }

    fn open_session(&self, user: &User) -> Result<AuthResponse, AppError> {
        let token = self.tokens.issue(user.id)?;

        Ok(AuthResponse {
            token,
            user: user.to_response(),
        })
    }
}

/// Check registration input without touching storage
pub fn validate_registration(request: &RegisterRequest) -> Result<(), AppError> {
    if request.name.trim().is_empty()
        || request.email.trim().is_empty()
        || request.password.is_empty()
    {
        return Err(AppError::validation("all fields are required"));
    }

    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    Ok(())
}

async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::internal(format!("hashing task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("failed to hash password: {e:?}")))
}

async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::internal(format!("verification task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("password verification error: {e:?}")))
}
