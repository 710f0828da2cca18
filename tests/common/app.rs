//! Application fixture
//!
//! Builds the full router over `MemoryStore` with a temporary upload
//! directory and a low bcrypt cost.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;
use vocabcards::backend::auth::TokenService;
use vocabcards::backend::db::MemoryStore;
use vocabcards::backend::routes::create_router;
use vocabcards::backend::server::AppState;
use vocabcards::backend::words::{DiskImageStore, WordStore};

/// Signing secret shared by every fixture
pub const TEST_SECRET: &str = "integration-test-secret";

/// bcrypt cost for tests
pub const TEST_HASH_COST: u32 = 4;

pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemoryStore>,
    uploads: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let (router, store, uploads) = build_router().await;
        Self::serve(router, store, uploads)
    }

    /// Fixture whose words go to `words` instead of the in-memory store
    pub async fn with_word_store(words: Arc<dyn WordStore>) -> Self {
        let (router, store, uploads) = build_router_with_words(Some(words)).await;
        Self::serve(router, store, uploads)
    }

    fn serve(router: Router, store: Arc<MemoryStore>, uploads: TempDir) -> Self {
        let server = TestServer::new(router).expect("Failed to start test server");

        Self {
            server,
            store,
            uploads,
        }
    }

    pub fn upload_dir(&self) -> &Path {
        self.uploads.path()
    }

    /// Token service using the fixture's secret
    pub fn tokens(&self) -> TokenService {
        TokenService::new(TEST_SECRET).expect("test secret is valid")
    }
}

/// Router over fresh in-memory state
pub async fn build_router() -> (Router, Arc<MemoryStore>, TempDir) {
    build_router_with_words(None).await
}

async fn build_router_with_words(
    words: Option<Arc<dyn WordStore>>,
) -> (Router, Arc<MemoryStore>, TempDir) {
    let uploads = tempfile::tempdir().expect("Failed to create upload dir");
    let store = Arc::new(MemoryStore::new());
    let tokens = TokenService::new(TEST_SECRET).expect("test secret is valid");
    let images = DiskImageStore::new(uploads.path().to_path_buf());

    let words = words.unwrap_or_else(|| store.clone() as Arc<dyn WordStore>);

    let state = AppState::new(store.clone(), words, tokens, images, TEST_HASH_COST);

    (create_router(state), store, uploads)
}
