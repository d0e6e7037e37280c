//! Integration tests for the admin role service.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The admin server running (cargo run -p zaatar-admin)
//! - An admin account per `TEST_ADMIN_EMAIL` / `TEST_ADMIN_PASSWORD`
//!   (grant it with: zt-cli admin grant -e <email>)
//!
//! Run with: cargo test -p zaatar-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use zaatar_integration_tests::{
    admin_base_url, admin_token, client, login, register_account,
};

const TEST_PASSWORD: &str = "integration-test";

async fn manage(
    http: &reqwest::Client,
    token: Option<&str>,
    body: &Value,
) -> reqwest::Response {
    let mut request = http
        .post(format!("{}/api/admins", admin_base_url()))
        .json(body);
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }
    request.send().await.expect("Failed to call role endpoint")
}

async fn list_admins(http: &reqwest::Client, token: &str) -> Vec<Value> {
    let resp = http
        .get(format!("{}/api/admins", admin_base_url()))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to list admins");
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Failed to parse admins list")
}

// ============================================================================
// Authentication & authorization ordering
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_missing_credential_is_401_regardless_of_body() {
    let http = client();

    for body in [
        json!({ "action": "add", "email": "x@example.com" }),
        json!({ "action": "bogus" }),
        json!({}),
    ] {
        let resp = manage(&http, None, &body).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "body: {body}");
        let parsed: Value = resp.json().await.expect("error envelope");
        assert!(parsed["error"].is_string());
    }
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_non_admin_caller_is_403_and_no_grant_appears() {
    let http = client();

    let (email, _) = register_account(&http, TEST_PASSWORD).await;
    let token = login(&http, &email, TEST_PASSWORD).await;

    let resp = manage(
        &http,
        Some(&token),
        &json!({ "action": "add", "email": email }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // The caller must not have managed to grant themselves anything.
    let admin = admin_token(&http).await;
    let admins = list_admins(&http, &admin).await;
    assert!(admins.iter().all(|a| a["email"] != email));
}

// ============================================================================
// Grant / revoke semantics
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_grant_twice_yields_one_row_then_revoke_is_idempotent() {
    let http = client();
    let admin = admin_token(&http).await;

    let (email, user_id) = register_account(&http, TEST_PASSWORD).await;
    let add = json!({ "action": "add", "email": email });

    for _ in 0..2 {
        let resp = manage(&http, Some(&admin), &add).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = resp.json().await.expect("ack");
        assert_eq!(body["success"], json!(true));
    }

    let rows: Vec<Value> = list_admins(&http, &admin)
        .await
        .into_iter()
        .filter(|a| a["email"] == json!(email.clone()))
        .collect();
    assert_eq!(rows.len(), 1, "duplicate grant rows for {email}");

    // Revoke twice: second removal of a non-existent grant still succeeds.
    let remove = json!({ "action": "remove", "userId": user_id });
    for _ in 0..2 {
        let resp = manage(&http, Some(&admin), &remove).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let admins = list_admins(&http, &admin).await;
    assert!(admins.iter().all(|a| a["email"] != json!(email.clone())));
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_self_revoke_is_rejected_and_access_survives() {
    let http = client();
    let admin = admin_token(&http).await;

    // Find the caller's own user id in the grants list.
    let (admin_email, _) = zaatar_integration_tests::admin_credentials();
    let admins = list_admins(&http, &admin).await;
    let own_id = admins
        .iter()
        .find(|a| a["email"] == json!(admin_email.clone()))
        .and_then(|a| a["user_id"].as_str())
        .expect("admin account not in grants list")
        .to_string();

    let resp = manage(
        &http,
        Some(&admin),
        &json!({ "action": "remove", "userId": own_id }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("error envelope");
    assert_eq!(body["error"], json!("You cannot remove your own admin access."));

    // Still an admin: the list call keeps working.
    let admins = list_admins(&http, &admin).await;
    assert!(admins.iter().any(|a| a["email"] == json!(admin_email.clone())));
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_unknown_email_is_400_user_not_found() {
    let http = client();
    let admin = admin_token(&http).await;

    let resp = manage(
        &http,
        Some(&admin),
        &json!({ "action": "add", "email": "nobody@nowhere.test" }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("error envelope");
    assert_eq!(
        body["error"],
        json!("No user found with that email. They must sign up first.")
    );
}

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_bogus_action_is_400_invalid_action() {
    let http = client();
    let admin = admin_token(&http).await;

    let resp = manage(&http, Some(&admin), &json!({ "action": "bogus" })).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("error envelope");
    assert_eq!(body["error"], json!("Invalid action"));
}

// ============================================================================
// CORS
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_options_preflight_returns_cors_headers() {
    let http = client();

    let resp = http
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/api/admins", admin_base_url()),
        )
        .header("Origin", "http://dashboard.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "authorization, content-type")
        .send()
        .await
        .expect("Failed to send preflight");

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    let allowed_headers = resp
        .headers()
        .get("access-control-allow-headers")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();
    assert!(allowed_headers.contains("authorization"));
    assert!(allowed_headers.contains("content-type"));
}

// ============================================================================
// Content API authorization
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and database"]
async fn test_content_routes_require_admin() {
    let http = client();

    // Unauthenticated: 401.
    let resp = http
        .get(format!("{}/api/settings", admin_base_url()))
        .send()
        .await
        .expect("Failed to call settings");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Authenticated but not admin: 403, and the write never happens.
    let (email, _) = register_account(&http, TEST_PASSWORD).await;
    let token = login(&http, &email, TEST_PASSWORD).await;
    let resp = http
        .post(format!("{}/api/categories", admin_base_url()))
        .bearer_auth(&token)
        .json(&json!({ "name": "Should Not Exist" }))
        .send()
        .await
        .expect("Failed to call categories");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let admin = admin_token(&http).await;
    let resp = http
        .get(format!("{}/api/categories", admin_base_url()))
        .bearer_auth(&admin)
        .send()
        .await
        .expect("Failed to list categories");
    let categories: Vec<Value> = resp.json().await.expect("categories list");
    assert!(categories.iter().all(|c| c["name"] != "Should Not Exist"));
}
