//! Tests for health check endpoints.
//!
//! These tests verify the health endpoints return correct status and
//! structure. No network or source access is required.

use axum::http::StatusCode;
use axum_test::TestServer;
use integration_tests::setup::TestContext;

/// Test /health endpoint returns proper structure
#[tokio::test]
async fn test_health_endpoint_structure() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();

    for field in [
        "status",
        "sheet_connected",
        "last_refresh_ok",
        "last_refresh_epoch",
        "rows_dropped",
        "label_fallbacks",
    ] {
        assert!(
            body.get(field).is_some(),
            "Response should have '{}' field",
            field
        );
    }
}

/// Test /health endpoint reports a valid status value
#[tokio::test]
async fn test_health_endpoint_status_value() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();

    // Components may not have reported healthy yet in a test context
    let status = body["status"].as_str().unwrap_or("");
    assert!(
        status == "healthy" || status == "degraded" || status == "unhealthy",
        "Status should be 'healthy', 'degraded', or 'unhealthy', got '{}'",
        status
    );
}

/// Test /health/ready endpoint
#[tokio::test]
async fn test_ready_endpoint() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/health/ready").await;

    // Ready endpoint returns 200 if the sheet has been probed healthy,
    // 503 otherwise; both are valid in a test context
    let status = response.status_code();
    assert!(
        status == StatusCode::OK || status == StatusCode::SERVICE_UNAVAILABLE,
        "Ready endpoint should return 200 or 503, got {}",
        status
    );
}

/// Test /health/live endpoint always returns 200 when the service runs
#[tokio::test]
async fn test_live_endpoint() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/health/live").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

/// Test counters in /health are numbers
#[tokio::test]
async fn test_health_counters_are_numbers() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert!(body["rows_dropped"].as_u64().is_some());
    assert!(body["label_fallbacks"].as_u64().is_some());
    assert!(body["last_refresh_epoch"].as_u64().is_some());
}
