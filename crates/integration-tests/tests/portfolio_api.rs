//! Integration tests for the portfolio document API.
//!
//! These tests require:
//! - A running `PostgreSQL` database
//! - The server running (cargo run -p folio-server)
//! - `TEST_ADMIN_PASSWORD` matching the server's `PORTFOLIO_ADMIN_PASSWORD`
//!
//! Run with: cargo test -p folio-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

/// Base URL for the API (configurable via environment).
fn base_url() -> String {
    std::env::var("PORTFOLIO_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// Admin password the server under test was started with.
fn admin_password() -> String {
    std::env::var("TEST_ADMIN_PASSWORD").expect("TEST_ADMIN_PASSWORD must be set")
}

/// Test helper: Log in and return a bearer token.
async fn login(client: &Client) -> String {
    let resp = client
        .post(format!("{}/api/admin/login", base_url()))
        .json(&json!({ "password": admin_password() }))
        .send()
        .await
        .expect("Failed to log in");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to read login response");
    body["token"]
        .as_str()
        .expect("Login response missing token")
        .to_string()
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_health() {
    let client = Client::new();

    let resp = client
        .get(format!("{}/api/health", base_url()))
        .send()
        .await
        .expect("Failed to reach health endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to read health body");
    assert_eq!(body["ok"], true);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_public_read_materializes_once() {
    let client = Client::new();
    let url = format!("{}/api/portfolio", base_url());

    // First read creates the document if absent
    let first: Value = client
        .get(&url)
        .send()
        .await
        .expect("Failed first read")
        .json()
        .await
        .expect("Failed to parse first read");

    assert!(first["profile"]["fullName"].is_string());
    assert!(first["skills"].is_array());

    // Second read returns the same document, same updatedAt
    let second: Value = client
        .get(&url)
        .send()
        .await
        .expect("Failed second read")
        .json()
        .await
        .expect("Failed to parse second read");

    assert_eq!(first, second);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_admin_read_requires_token() {
    let client = Client::new();
    let url = format!("{}/api/admin/portfolio", base_url());

    let resp = client.get(&url).send().await.expect("Failed request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = client
        .get(&url)
        .bearer_auth("not-a-real-token")
        .send()
        .await
        .expect("Failed request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_put_round_trips() {
    let client = Client::new();
    let token = login(&client).await;

    let submitted = json!({
        "ownerEmail": "ada@example.com",
        "profile": {
            "fullName": "Ada Lovelace",
            "headline": "Engineer",
            "bio": "Notes on the Analytical Engine.",
            "location": "London",
            "avatarUrl": "",
            "resumeUrl": ""
        },
        "settings": { "brandName": "Ada", "tagline": "Notes" },
        "skills": [{ "name": "Rust", "category": "Systems", "level": 95 }],
        "projects": [{
            "title": "Engine",
            "summary": "A calculating machine.",
            "liveUrl": "",
            "repoUrl": "",
            "imageUrl": "",
            "techStack": ["Rust"]
        }],
        "education": [{
            "institution": "Analytical U",
            "degree": "BSc",
            "year": "1843",
            "description": ""
        }],
        "socialLinks": [{ "platform": "GitHub", "url": "https://github.com/ada" }]
    });

    let saved: Value = client
        .put(format!("{}/api/admin/portfolio", base_url()))
        .bearer_auth(&token)
        .json(&submitted)
        .send()
        .await
        .expect("Failed to save")
        .json()
        .await
        .expect("Failed to parse save response");

    // Subsequent read returns exactly what was submitted, modulo updatedAt
    let mut fetched: Value = client
        .get(format!("{}/api/portfolio", base_url()))
        .send()
        .await
        .expect("Failed to read back")
        .json()
        .await
        .expect("Failed to parse read back");

    assert!(fetched["updatedAt"].is_string());
    assert_eq!(fetched["updatedAt"], saved["updatedAt"]);

    fetched.as_object_mut().expect("document").remove("updatedAt");
    for (key, value) in submitted.as_object().expect("payload") {
        assert_eq!(&fetched[key], value, "field {key} did not round-trip");
    }
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_omitted_lists_are_wiped() {
    let client = Client::new();
    let token = login(&client).await;

    // Save a document that has a skill
    let resp = client
        .put(format!("{}/api/admin/portfolio", base_url()))
        .bearer_auth(&token)
        .json(&json!({ "skills": [{ "name": "Rust" }] }))
        .send()
        .await
        .expect("Failed to save with skills");
    assert_eq!(resp.status(), StatusCode::OK);

    // Save again with skills omitted: the list is wiped, not kept
    let saved: Value = client
        .put(format!("{}/api/admin/portfolio", base_url()))
        .bearer_auth(&token)
        .json(&json!({ "projects": [] }))
        .send()
        .await
        .expect("Failed to save without skills")
        .json()
        .await
        .expect("Failed to parse save response");

    assert_eq!(saved["skills"], json!([]));

    let fetched: Value = client
        .get(format!("{}/api/portfolio", base_url()))
        .send()
        .await
        .expect("Failed to read back")
        .json()
        .await
        .expect("Failed to parse read back");

    assert_eq!(fetched["skills"], json!([]));
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_malformed_body_is_rejected() {
    let client = Client::new();
    let token = login(&client).await;

    // A non-array list field is a 400 with a structured error body
    let resp = client
        .put(format!("{}/api/admin/portfolio", base_url()))
        .bearer_auth(&token)
        .json(&json!({ "skills": 5 }))
        .send()
        .await
        .expect("Failed request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to read error body");
    assert!(body["error"].is_string());
}
