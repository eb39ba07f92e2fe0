//! Integration tests for the health endpoint and routing edges.

mod helpers;

use axum::http::StatusCode;
use helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
    assert!(response.body["data"]["version"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/nope", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
