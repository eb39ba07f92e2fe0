//! Integration tests for text shares.

mod helpers;

use axum::http::StatusCode;
use chrono::{DateTime, Duration, Utc};
use dropcode_core::traits::clock::Clock;
use helpers::{TEST_MAX_TEXT, TestApp, is_share_code};
use serde_json::json;

#[tokio::test]
async fn test_share_and_fetch_text() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/text",
            Some(json!({ "text": "hello", "language": "text" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    let code = response.share_code();
    assert!(is_share_code(&code));
    assert_eq!(response.body["accessUrl"], format!("/t/{code}"));
    assert_eq!(response.body["textLength"], 5);
    assert_eq!(response.body["language"], "text");

    let fetched = app
        .request("GET", &format!("/api/text/{code}"), None, None)
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["success"], true);
    assert_eq!(fetched.body["content"], "hello");
    assert_eq!(fetched.body["language"], "text");
    assert_eq!(fetched.body["expiresAt"], response.body["expiresAt"]);
}

#[tokio::test]
async fn test_language_defaults_and_round_trips() {
    let app = TestApp::new();

    let plain = app
        .request("POST", "/api/text", Some(json!({ "text": "x" })), None)
        .await;
    assert_eq!(plain.body["language"], "text");

    let rust = app
        .request(
            "POST",
            "/api/text",
            Some(json!({ "text": "fn main() {}\n", "language": "rust" })),
            None,
        )
        .await;
    let fetched = app
        .request("GET", &format!("/api/text/{}", rust.share_code()), None, None)
        .await;
    assert_eq!(fetched.body["language"], "rust");
    assert_eq!(fetched.body["content"], "fn main() {}\n");
}

#[tokio::test]
async fn test_stored_record_layout() {
    let app = TestApp::new();
    let code = app
        .request("POST", "/api/text", Some(json!({ "text": "hi" })), None)
        .await
        .share_code();

    let raw = std::fs::read_to_string(app.uploads_dir().join(format!("{code}.txt"))).unwrap();
    let record: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(record["content"], "hi");
    assert_eq!(record["language"], "text");

    let created: DateTime<Utc> = record["createdAt"].as_str().unwrap().parse().unwrap();
    let expires: DateTime<Utc> = record["expiresAt"].as_str().unwrap().parse().unwrap();
    assert_eq!(created, app.clock.now());
    assert_eq!(expires - created, Duration::hours(24));
    // Pretty-printed.
    assert!(raw.contains('\n'));
}

#[tokio::test]
async fn test_missing_or_malformed_text_is_rejected() {
    let app = TestApp::new();

    for body in [
        json!({}),
        json!({ "text": "" }),
        json!({ "text": 42 }),
        json!({ "content": "hello" }),
    ] {
        let response = app.request("POST", "/api/text", Some(body.clone()), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(response.error(), "No text content received");
    }

    let response = app.post_text_raw("{not json").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "No text content received");

    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_oversize_text_rejected_before_write() {
    let app = TestApp::new();

    let at_limit = "a".repeat(TEST_MAX_TEXT);
    let response = app
        .request("POST", "/api/text", Some(json!({ "text": at_limit })), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let over = "a".repeat(TEST_MAX_TEXT + 1);
    let response = app
        .request("POST", "/api/text", Some(json!({ "text": over })), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Text too long (max 1KB)");
    assert_eq!(app.stored_files().len(), 1);
}

#[tokio::test]
async fn test_text_limit_counts_utf16_units() {
    let app = TestApp::new();

    // Each emoji is one character but two UTF-16 units.
    let text = "🦀".repeat(TEST_MAX_TEXT / 2 + 1);
    let response = app
        .request("POST", "/api/text", Some(json!({ "text": text })), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Text too long (max 1KB)");
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_text_limit_is_not_measured_in_bytes() {
    let app = TestApp::new();

    // Multi-byte characters: twice the limit in bytes, exactly the limit in chars.
    let text = "é".repeat(TEST_MAX_TEXT);
    let response = app
        .request("POST", "/api/text", Some(json!({ "text": text })), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["textLength"], TEST_MAX_TEXT);
}

#[tokio::test]
async fn test_text_expiry_boundary() {
    let app = TestApp::new();
    let code = app
        .request("POST", "/api/text", Some(json!({ "text": "soon gone" })), None)
        .await
        .share_code();
    let path = format!("/api/text/{code}");

    app.clock.advance(Duration::hours(24) - Duration::milliseconds(1));
    assert_eq!(app.request("GET", &path, None, None).await.status, StatusCode::OK);

    app.clock.advance(Duration::milliseconds(2));
    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::GONE);
    assert_eq!(response.error(), "Text has expired");
}

#[tokio::test]
async fn test_text_lookup_errors() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/text/ABC", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Invalid share code");

    let response = app.request("GET", "/api/text/ABCDEF", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error(), "Text not found or expired");
}

#[tokio::test]
async fn test_plain_text_file_is_not_a_text_share() {
    let app = TestApp::new();
    let code = app
        .upload(Some("readme.txt"), Some("text/plain"), b"just a file")
        .await
        .share_code();

    let response = app
        .request("GET", &format!("/api/text/{code}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
