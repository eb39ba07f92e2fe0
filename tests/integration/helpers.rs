//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use dropcode_api::AppState;
use dropcode_core::config::AppConfig;
use dropcode_core::traits::clock::{Clock, ManualClock};
use dropcode_service::share::CodeGenerator;

/// Multipart boundary used by [`TestApp::upload`].
const BOUNDARY: &str = "dropcode-test-boundary";

/// File size limit used by [`TestApp::new`].
pub const TEST_MAX_FILE: u64 = 64 * 1024;

/// Text length limit used by [`TestApp::new`].
pub const TEST_MAX_TEXT: usize = 1024;

/// Cleanup secret used by [`TestApp::new`].
pub const TEST_SECRET: &str = "test-cleanup-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Frozen clock shared with the share store
    pub clock: Arc<ManualClock>,
    /// Application config
    pub config: AppConfig,
    /// Keeps the uploads directory alive for the test's duration
    _dir: tempfile::TempDir,
}

impl TestApp {
    /// Create a test application with small limits and a fresh uploads directory
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.share.max_file_size_bytes = TEST_MAX_FILE;
        config.share.max_text_length = TEST_MAX_TEXT;
        config.cleanup.secret = TEST_SECRET.to_string();
        Self::with_config(config)
    }

    /// Create a test application from an explicit config; the uploads directory
    /// is always replaced by a temporary one.
    pub fn with_config(mut config: AppConfig) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        config.storage.uploads_dir = dir
            .path()
            .join("uploads")
            .to_string_lossy()
            .into_owned();

        let clock = Arc::new(ManualClock::starting_now());
        let state = AppState::with_parts(
            config.clone(),
            Arc::clone(&clock) as Arc<dyn Clock>,
            Arc::new(CodeGenerator::new()),
        );

        Self {
            router: dropcode_api::build_app(state),
            clock,
            config,
            _dir: dir,
        }
    }

    /// The uploads directory (may not exist yet)
    pub fn uploads_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.storage.uploads_dir)
    }

    /// Names of the artifacts currently stored, sorted
    pub fn stored_files(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(self.uploads_dir()) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Send a JSON request
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// POST a raw body to `/api/text`
    pub async fn post_text_raw(&self, raw: &str) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri("/api/text")
            .header("Content-Type", "application/json")
            .body(Body::from(raw.to_string()))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Upload `data` as the multipart `file` field
    pub async fn upload(
        &self,
        file_name: Option<&str>,
        content_type: Option<&str>,
        data: &[u8],
    ) -> TestResponse {
        self.upload_field("file", file_name, content_type, data)
            .await
    }

    /// Upload `data` under an arbitrary multipart field name
    pub async fn upload_field(
        &self,
        field: &str,
        file_name: Option<&str>,
        content_type: Option<&str>,
        data: &[u8],
    ) -> TestResponse {
        let mut disposition = format!("Content-Disposition: form-data; name=\"{field}\"");
        if let Some(name) = file_name {
            disposition.push_str(&format!("; filename=\"{name}\""));
        }

        let mut body = Vec::with_capacity(data.len() + 256);
        body.extend_from_slice(format!("--{BOUNDARY}\r\n{disposition}\r\n").as_bytes());
        if let Some(ct) = content_type {
            body.extend_from_slice(format!("Content-Type: {ct}\r\n").as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        let req = Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prepared request through the router
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body")
            .to_vec();

        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            bytes,
        }
    }
}

/// Test response wrapper
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body (`Null` when the body is not JSON)
    pub body: Value,
    /// Raw body bytes
    pub bytes: Vec<u8>,
}

impl TestResponse {
    /// A response header as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The `error` message of an error body
    pub fn error(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }

    /// The share code of a successful share
    pub fn share_code(&self) -> String {
        self.body["shareCode"]
            .as_str()
            .expect("response has no shareCode")
            .to_string()
    }
}

/// Whether `code` is six uppercase hex characters
pub fn is_share_code(code: &str) -> bool {
    code.len() == 6
        && code
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
}
