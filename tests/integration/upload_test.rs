//! Integration tests for file shares.

mod helpers;

use axum::http::StatusCode;
use helpers::{TEST_MAX_FILE, TestApp, is_share_code};

#[tokio::test]
async fn test_upload_plain_text_file() {
    let app = TestApp::new();

    let response = app
        .upload(Some("notes.txt"), Some("text/plain"), b"0123456789")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    let code = response.share_code();
    assert!(is_share_code(&code), "bad code {code}");
    assert_eq!(response.body["fileName"], "notes.txt");
    assert_eq!(response.body["size"], 10);
    assert_eq!(response.body["mimeType"], "text/plain");
    assert_eq!(
        response.body["downloadUrl"],
        format!("/api/download/{code}")
    );
    assert!(response.body["expiresAt"].as_str().unwrap().ends_with('Z'));

    assert_eq!(app.stored_files(), vec![format!("{code}.txt")]);
}

#[tokio::test]
async fn test_upload_creates_uploads_dir_lazily() {
    let app = TestApp::new();
    assert!(!app.uploads_dir().exists());

    let response = app.upload(Some("a.png"), Some("image/png"), b"\x89PNG").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(app.uploads_dir().is_dir());
}

#[tokio::test]
async fn test_unknown_type_stored_as_bin_with_fallbacks() {
    let app = TestApp::new();

    let response = app.upload(None, None, b"\x00\x01\x02").await;

    assert_eq!(response.status, StatusCode::OK);
    let code = response.share_code();
    assert_eq!(response.body["mimeType"], "application/octet-stream");
    assert_eq!(response.body["fileName"], format!("{code}.bin"));
    assert_eq!(app.stored_files(), vec![format!("{code}.bin")]);
}

#[tokio::test]
async fn test_public_base_path_prefixes_download_url() {
    let mut config = dropcode_core::config::AppConfig::default();
    config.server.public_base_path = "/share/".to_string();
    let app = TestApp::with_config(config);

    let response = app.upload(Some("a.css"), Some("text/css"), b"a{}").await;

    let code = response.share_code();
    assert_eq!(
        response.body["downloadUrl"],
        format!("/share/api/download/{code}")
    );
}

#[tokio::test]
async fn test_missing_file_field_is_rejected() {
    let app = TestApp::new();

    let response = app
        .upload_field("attachment", Some("a.txt"), Some("text/plain"), b"hi")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.error(), "No file received");
    assert_eq!(response.body["code"], "VALIDATION_ERROR");
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_non_multipart_body_is_rejected() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/upload", Some(serde_json::json!({"file": "x"})), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "No file received");
}

#[tokio::test]
async fn test_oversize_file_rejected_before_write() {
    let app = TestApp::new();

    let data = vec![7u8; TEST_MAX_FILE as usize + 1];
    let response = app.upload(Some("big.pdf"), Some("application/pdf"), &data).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "File too large (max 64KB)");
    assert!(app.stored_files().is_empty());
    assert!(!app.uploads_dir().exists());
}

#[tokio::test]
async fn test_body_over_transport_limit_reports_file_too_large() {
    let app = TestApp::new();

    // Well past the payload limit plus multipart overhead.
    let data = vec![0u8; (TEST_MAX_FILE as usize) * 4];
    let response = app.upload(Some("huge.bin"), None, &data).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "File too large (max 64KB)");
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_101_mib_upload_rejected_at_default_limit() {
    let app = TestApp::with_config(dropcode_core::config::AppConfig::default());

    let data = vec![0u8; 101 * 1024 * 1024];
    let response = app.upload(Some("big.bin"), None, &data).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "File too large (max 100MB)");
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_each_upload_gets_its_own_code() {
    let app = TestApp::new();

    let first = app.upload(Some("a.txt"), Some("text/plain"), b"a").await;
    let second = app.upload(Some("b.txt"), Some("text/plain"), b"b").await;

    assert_ne!(first.share_code(), second.share_code());
    assert_eq!(app.stored_files().len(), 2);
}
