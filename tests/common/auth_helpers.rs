//! Authentication test helpers

use axum_test::TestServer;
use serde_json::json;
use vocabcards::shared::AuthResponse;

/// Default password for test users
pub const TEST_PASSWORD: &str = "secret1";

/// Register a user through the API and return the auth response
pub async fn register_user(server: &TestServer, name: &str, email: &str) -> AuthResponse {
    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "name": name,
            "email": email,
            "password": TEST_PASSWORD,
        }))
        .await;

    response.assert_status_ok();
    response.json::<AuthResponse>()
}

/// Log a user in through the API and return the raw response
pub async fn login(server: &TestServer, email: &str, password: &str) -> axum_test::TestResponse {
    server
        .post("/api/auth/login")
        .json(&json!({
            "email": email,
            "password": password,
        }))
        .await
}
