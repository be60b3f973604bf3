//! Common test utilities for API testing with a mock catalog.
//!
//! This module provides a test fixture that creates an in-process server
//! with a mock content catalog injected, so every endpoint can be exercised
//! without reaching TMDB.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use found404_core::{
    testing::MockCatalog, Config, ContentCatalog, MoodConfig, ServerConfig, TmdbConfig,
};

/// Re-export fixtures for test convenience
pub use found404_core::testing::fixtures;

/// Test fixture for API testing with a mock catalog.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_mood() {
///     let fixture = TestFixture::new();
///     fixture.catalog.set_discover(MediaType::Movie, fixtures::movies(5)).await;
///
///     let response = fixture.get("/api/v1/moods/happy").await;
///
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock catalog - configure upstream responses
    pub catalog: MockCatalog,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with default mood settings.
    pub fn new() -> Self {
        Self::with_moods(MoodConfig::default())
    }

    /// Create a test fixture with custom mood settings.
    pub fn with_moods(moods: MoodConfig) -> Self {
        let catalog = MockCatalog::new();

        let config = Config {
            server: ServerConfig {
                host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
                port: 0, // Not used for in-process testing
            },
            tmdb: TmdbConfig {
                api_key: "test-api-key".to_string(),
                base_url: None,
                timeout_secs: 5,
            },
            moods,
        };

        let state = Arc::new(found404_server::state::AppState::new(
            config,
            Arc::new(catalog.clone()) as Arc<dyn ContentCatalog>,
        ));

        let router = found404_server::api::create_router(state);

        Self { router, catalog }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body_bytes).into()))
        };

        TestResponse { status, body }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}

/// Helper to assert a JSON path equals expected value.
#[macro_export]
macro_rules! assert_json_path {
    ($json:expr, $path:expr, $expected:expr) => {
        let actual = &$json[$path];
        assert_eq!(
            actual, &$expected,
            "Path '{}' expected {:?}, got {:?}",
            $path, $expected, actual
        );
    };
}
