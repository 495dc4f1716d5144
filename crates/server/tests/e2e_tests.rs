//! End-to-end tests with a mocked upstream photo API.
//!
//! These tests run the full router stack in-process with a mock provider,
//! covering the search endpoint, the detail endpoint, and the error mapping
//! between upstream failures and HTTP statuses.

mod common;

use axum::http::StatusCode;
use viewfinder_core::photos::PhotoError;

use common::{fixtures, TestFixture};

// =============================================================================
// Basic API Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/health").await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_config_endpoint_hides_api_key() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/config").await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["photos"]["backend"], "unsplash");
    assert_eq!(
        response.body["photos"]["unsplash"]["api_key_configured"],
        true
    );

    let raw = serde_json::to_string(&response.body).unwrap();
    assert!(
        !raw.contains("test-secret-key"),
        "config response must not leak the upstream key"
    );
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let fixture = TestFixture::new();

    // Generate at least one tracked request first
    fixture.get("/api/v1/health").await;

    let response = fixture.get("/api/v1/metrics").await;
    assert_status!(response, StatusCode::OK);

    let text = response.body.as_str().unwrap_or_default().to_string();
    assert!(text.contains("viewfinder_http_requests_total"));
}

// =============================================================================
// Photo Search Tests
// =============================================================================

#[tokio::test]
async fn test_search_returns_upstream_results_in_order() {
    let fixture = TestFixture::new();
    fixture
        .provider
        .set_results(vec![
            fixtures::photo_summary("first"),
            fixtures::photo_summary("second"),
        ])
        .await;

    let response = fixture.get("/api/v1/photos/search?query=paris").await;

    assert_status!(response, StatusCode::OK);
    let results = response.body.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["id"], "first");
    assert_eq!(results[1]["id"], "second");
    assert!(results[0]["thumbnail_url"].is_string());
}

#[tokio::test]
async fn test_search_decodes_query_term() {
    let fixture = TestFixture::new();

    let response = fixture
        .get("/api/v1/photos/search?query=caf%C3%A9%20de%20paris")
        .await;
    assert_status!(response, StatusCode::OK);

    let queries = fixture.provider.recorded_queries().await;
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].query, "café de paris");
}

#[tokio::test]
async fn test_search_empty_result_is_ok() {
    let fixture = TestFixture::new();

    let response = fixture.get("/api/v1/photos/search?query=zzzzz").await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_search_per_page_override() {
    let fixture = TestFixture::new();

    fixture
        .get("/api/v1/photos/search?query=paris&per_page=5")
        .await;

    let queries = fixture.provider.recorded_queries().await;
    assert_eq!(queries[0].per_page, 5);
}

#[tokio::test]
async fn test_search_without_provider_returns_503() {
    let fixture = TestFixture::without_provider();

    let response = fixture.get("/api/v1/photos/search?query=paris").await;
    assert_status!(response, StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.body["error"].is_string());
}

#[tokio::test]
async fn test_search_upstream_failure_maps_to_bad_gateway() {
    let fixture = TestFixture::new();
    fixture
        .provider
        .set_next_error(PhotoError::ApiError {
            status: 500,
            message: "upstream exploded".to_string(),
        })
        .await;

    let response = fixture.get("/api/v1/photos/search?query=paris").await;
    assert_status!(response, StatusCode::BAD_GATEWAY);
    assert!(response.body["error"]
        .as_str()
        .unwrap()
        .contains("upstream exploded"));
}

#[tokio::test]
async fn test_search_rate_limit_maps_to_429() {
    let fixture = TestFixture::new();
    fixture
        .provider
        .set_next_error(PhotoError::RateLimitExceeded)
        .await;

    let response = fixture.get("/api/v1/photos/search?query=paris").await;
    assert_status!(response, StatusCode::TOO_MANY_REQUESTS);
}

// =============================================================================
// Photo Detail Tests
// =============================================================================

#[tokio::test]
async fn test_get_photo_detail() {
    let fixture = TestFixture::new();
    fixture
        .provider
        .set_detail(fixtures::photo_detail("abc123", "Jane Doe"))
        .await;

    let response = fixture.get("/api/v1/photos/abc123").await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["id"], "abc123");
    assert_eq!(response.body["author_name"], "Jane Doe");
    assert!(response.body["full_image_url"].is_string());
    assert!(response.body["source_link"].is_string());
    assert!(response.body["description"].is_string());
}

#[tokio::test]
async fn test_get_photo_not_found() {
    let fixture = TestFixture::new();

    let response = fixture.get("/api/v1/photos/missing123").await;

    assert_status!(response, StatusCode::NOT_FOUND);
    assert!(response.body["error"]
        .as_str()
        .unwrap()
        .contains("Photo not found"));
}

#[tokio::test]
async fn test_get_photo_upstream_failure() {
    let fixture = TestFixture::new();
    fixture
        .provider
        .set_next_detail_error(PhotoError::ApiError {
            status: 500,
            message: "boom".to_string(),
        })
        .await;

    let response = fixture.get("/api/v1/photos/abc123").await;
    assert_status!(response, StatusCode::BAD_GATEWAY);
}

// =============================================================================
// Provider Status Tests
// =============================================================================

#[tokio::test]
async fn test_provider_status_configured() {
    let fixture = TestFixture::new();

    let response = fixture.get("/api/v1/photos/status").await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["backend"], "mock");
    assert_eq!(response.body["configured"], true);
}

#[tokio::test]
async fn test_provider_status_unconfigured() {
    let fixture = TestFixture::without_provider();

    let response = fixture.get("/api/v1/photos/status").await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["backend"], "none");
    assert_eq!(response.body["configured"], false);
}
