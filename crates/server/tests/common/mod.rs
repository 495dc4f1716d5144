//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process router
//! with a mock photo provider injected, enabling comprehensive E2E testing
//! without external infrastructure.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use viewfinder_core::photos::UnsplashConfig;
use viewfinder_core::search::SearchConfig;
use viewfinder_core::testing::MockPhotoProvider;
use viewfinder_core::{Config, PhotoBackend, PhotoProvider, PhotosConfig, ServerConfig};

use viewfinder_server::api::create_router;
use viewfinder_server::state::AppState;

/// Re-export fixtures for test convenience
pub use viewfinder_core::testing::fixtures;

/// Test fixture for E2E testing with a mock photo provider.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock provider - configure search results and details
    pub provider: Arc<MockPhotoProvider>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
            port: 0, // Not used for in-process testing
        },
        photos: Some(PhotosConfig {
            backend: PhotoBackend::Unsplash,
            unsplash: Some(UnsplashConfig {
                api_key: "test-secret-key".to_string(),
                base_url: None,
                timeout_secs: 30,
            }),
        }),
        search: SearchConfig::default(),
    }
}

impl TestFixture {
    /// Create a new test fixture with a mock provider wired in.
    pub fn new() -> Self {
        let provider = Arc::new(MockPhotoProvider::new());
        let state = Arc::new(AppState::new(
            test_config(),
            Some(Arc::clone(&provider) as Arc<dyn PhotoProvider>),
        ));

        Self {
            router: create_router(state),
            provider,
        }
    }

    /// Create a test fixture with no provider configured.
    pub fn without_provider() -> Self {
        let state = Arc::new(AppState::new(
            Config {
                photos: None,
                ..test_config()
            },
            None,
        ));

        Self {
            router: create_router(state),
            provider: Arc::new(MockPhotoProvider::new()),
        }
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
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body_bytes).to_string()))
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
