//! Integration tests for file retrieval.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Duration;
use helpers::TestApp;
use serde_json::json;

fn gzip_get(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .header(header::ACCEPT_ENCODING, "gzip")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_download_returns_original_bytes() {
    let app = TestApp::new();
    let code = app
        .upload(Some("notes.txt"), Some("text/plain"), b"0123456789")
        .await
        .share_code();

    let response = app
        .request("GET", &format!("/api/download/{code}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.bytes, b"0123456789");
    assert_eq!(response.header("content-type"), Some("text/plain"));
    assert_eq!(response.header("content-length"), Some("10"));
    assert_eq!(
        response.header("content-disposition"),
        Some(format!("attachment; filename=\"{code}.txt\"").as_str())
    );
}

#[tokio::test]
async fn test_download_is_never_compressed() {
    let app = TestApp::new();
    let payload = "compressible line\n".repeat(12);
    let code = app
        .upload(Some("notes.txt"), Some("text/plain"), payload.as_bytes())
        .await
        .share_code();

    let response = app
        .send(gzip_get(&format!("/api/download/{code}")))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-encoding"), None);
    assert_eq!(
        response.header("content-length"),
        Some(payload.len().to_string().as_str())
    );
    assert_eq!(response.bytes, payload.as_bytes());
}

#[tokio::test]
async fn test_json_responses_still_compress() {
    let app = TestApp::new();
    let code = app
        .request(
            "POST",
            "/api/text",
            Some(json!({ "text": "compress me ".repeat(20) })),
            None,
        )
        .await
        .share_code();

    let response = app.send(gzip_get(&format!("/api/text/{code}"))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-encoding"), Some("gzip"));
}

#[tokio::test]
async fn test_download_binary_round_trip() {
    let app = TestApp::new();
    let payload: Vec<u8> = (0..=255u8).cycle().take(20_000).collect();
    let code = app
        .upload(Some("photo.jpg"), Some("image/jpeg"), &payload)
        .await
        .share_code();

    let response = app
        .request("GET", &format!("/api/download/{code}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), Some("image/jpeg"));
    assert_eq!(response.bytes, payload);
}

#[tokio::test]
async fn test_download_code_is_case_insensitive() {
    let app = TestApp::new();
    let code = app
        .upload(None, Some("application/json"), b"{}")
        .await
        .share_code();

    let response = app
        .request(
            "GET",
            &format!("/api/download/{}", code.to_lowercase()),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn test_malformed_codes_are_bad_requests() {
    let app = TestApp::new();

    for bad in ["ABC", "ABCDEFG", "AB%2FCD", "..%2F..%2Fx"] {
        let response = app
            .request("GET", &format!("/api/download/{bad}"), None, None)
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "code {bad}");
        assert_eq!(response.error(), "Invalid share code");
    }
}

#[tokio::test]
async fn test_unknown_code_is_not_found() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/download/ABCDEF", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error(), "File not found or expired");
    assert_eq!(response.body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_file_expiry_is_gone_not_not_found() {
    let app = TestApp::new();
    let code = app
        .upload(Some("a.gif"), Some("image/gif"), b"GIF89a")
        .await
        .share_code();
    let path = format!("/api/download/{code}");

    // File age comes from the artifact's mtime, which is a little after the
    // clock's starting instant; a one-minute margin keeps the edges clear.
    app.clock.advance(Duration::hours(24) - Duration::minutes(1));
    assert_eq!(app.request("GET", &path, None, None).await.status, StatusCode::OK);

    app.clock.advance(Duration::minutes(2));
    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::GONE);
    assert_eq!(response.error(), "File has expired");
    assert_eq!(response.body["code"], "EXPIRED");

    // Reads never delete.
    assert_eq!(app.stored_files().len(), 1);
}

#[tokio::test]
async fn test_text_share_downloads_as_txt_file() {
    let app = TestApp::new();
    let code = app
        .request(
            "POST",
            "/api/text",
            Some(serde_json::json!({ "text": "hello" })),
            None,
        )
        .await
        .share_code();

    let response = app
        .request("GET", &format!("/api/download/{code}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), Some("text/plain"));
    assert_eq!(response.body["content"], "hello");
}
