/**
 * Router Configuration
 *
 * Combines every route into a single Axum router.
 *
 * # Public Routes
 *
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 * - `GET /health` - Liveness probe
 * - `GET /uploads/{file}` - Stored images
 *
 * # Protected Routes
 *
 * Mounted with `route_layer`, so the session middleware runs only for
 * matched routes and unknown paths still answer 404 rather than 401.
 *
 * - `GET /api/auth/me` - Current user profile
 * - `POST /api/words` - Create a word (multipart)
 * - `GET /api/words` - List the caller's words
 */

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::backend::auth::handlers::{get_me, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::words::handlers::{create_word, list_words, MAX_UPLOAD_BYTES};

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let upload_dir = app_state.images.dir().to_path_buf();

    let public = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/health", get(health));

    let protected = Router::new()
        .route("/api/auth/me", get(get_me))
        .route(
            "/api/words",
            post(create_word)
                .get(list_words)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.tokens.clone(),
            auth_middleware,
        ));

    public
        .merge(protected)
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
