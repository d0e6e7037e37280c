//! Integration tests for Za'atar Kitchen.
//!
//! # Running Tests
//!
//! The tests exercise running servers and are `#[ignore]`d by default:
//!
//! ```bash
//! # Start the database, run migrations, start both binaries, then:
//! cargo test -p zaatar-integration-tests -- --ignored
//! ```
//!
//! An admin account must exist for the role-service tests; its credentials
//! are taken from `TEST_ADMIN_EMAIL` / `TEST_ADMIN_PASSWORD` (and the
//! account must hold the admin grant, e.g. via `zt-cli admin grant`).

use serde_json::Value;

/// Base URL for the admin API (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Base URL for the public site (configurable via environment).
#[must_use]
pub fn site_base_url() -> String {
    std::env::var("SITE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Credentials of the pre-provisioned admin account.
#[must_use]
pub fn admin_credentials() -> (String, String) {
    (
        std::env::var("TEST_ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string()),
        std::env::var("TEST_ADMIN_PASSWORD").unwrap_or_else(|_| "integration-test".to_string()),
    )
}

/// Create an HTTP client.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}

/// Register a throwaway account, returning its email and id.
///
/// # Panics
///
/// Panics if the request fails or the response is malformed.
pub async fn register_account(client: &reqwest::Client, password: &str) -> (String, String) {
    let email = format!("integration-test-{}@example.com", uuid::Uuid::new_v4());
    let resp = client
        .post(format!("{}/auth/register", admin_base_url()))
        .json(&serde_json::json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to register account");
    assert!(resp.status().is_success(), "register failed: {resp:?}");

    let body: Value = resp.json().await.expect("Failed to parse register body");
    let user_id = body["user_id"]
        .as_str()
        .expect("register response missing user_id")
        .to_string();

    (email, user_id)
}

/// Log in and return a bearer token.
///
/// # Panics
///
/// Panics if the request fails or the response is malformed.
pub async fn login(client: &reqwest::Client, email: &str, password: &str) -> String {
    let resp = client
        .post(format!("{}/auth/login", admin_base_url()))
        .json(&serde_json::json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to login");
    assert!(resp.status().is_success(), "login failed for {email}");

    let body: Value = resp.json().await.expect("Failed to parse login body");
    body["token"]
        .as_str()
        .expect("login response missing token")
        .to_string()
}

/// Log in as the pre-provisioned admin and return a bearer token.
pub async fn admin_token(client: &reqwest::Client) -> String {
    let (email, password) = admin_credentials();
    login(client, &email, &password).await
}
