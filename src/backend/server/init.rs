/**
 * Server Initialization
 *
 * Builds the application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Create the token service; an empty secret is fatal
 * 2. Connect to Postgres with bounded retry
 * 3. Run pending migrations
 * 4. Create the upload directory
 * 5. Build `AppState` and the router
 *
 * Any failure aborts startup; the binary logs it and exits non-zero.
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::sessions::{TokenError, TokenService};
use crate::backend::db::{connect_with_retry, BootstrapError, PgStore, RetryPolicy};
use crate::backend::routes::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::words::images::DiskImageStore;

/// Fatal startup failure
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("token service unavailable: {0}")]
    Tokens(#[from] TokenError),

    #[error(transparent)]
    Database(#[from] BootstrapError),

    #[error("failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("failed to create upload directory: {0}")]
    UploadDir(#[from] std::io::Error),
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `StartupError` if the secret is unusable, the database stays
/// unreachable after every retry, migrations fail, or the upload directory
/// cannot be created.
pub async fn create_app(config: &ServerConfig) -> Result<Router, StartupError> {
    tracing::info!("Initializing VocabCards backend server");

    let tokens = TokenService::new(&config.jwt_secret)?;

    let pool = connect_with_retry(
        &config.database_url,
        config.max_connections,
        RetryPolicy::default(),
    )
    .await?;

    let store = Arc::new(PgStore::new(pool));
    store.migrate().await?;
    tracing::info!("Database migrations applied");

    let images = DiskImageStore::new(config.upload_dir.clone());
    images.ensure_dir().await?;
    tracing::info!("Uploads served from {}", config.upload_dir.display());

    let state = AppState::new(store.clone(), store, tokens, images, config.hash_cost);

    Ok(create_router(state))
}
