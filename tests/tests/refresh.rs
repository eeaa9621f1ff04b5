//! Tests for the freshness check endpoint.

use axum::http::StatusCode;
use axum_test::TestServer;
use integration_tests::fixtures::{
    self, SAMPLE_ATHLETE_COUNT, SAMPLE_DROPPED_ROWS, SAMPLE_SESSION_COUNT,
};
use integration_tests::setup::TestContext;

/// The endpoint reports distinct counts over the full dataset.
#[tokio::test]
async fn test_refresh_reports_distinct_counts() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/api/refresh").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["session_count"], SAMPLE_SESSION_COUNT as u64);
    assert_eq!(body["athlete_count"], SAMPLE_ATHLETE_COUNT as u64);
    assert_eq!(body["rows_dropped"], SAMPLE_DROPPED_ROWS as u64);
    assert!(body["last_updated"].as_str().is_some());
}

/// Counts cover the full dataset, not the analysis window: more sessions
/// than the window holds must still all be counted.
#[tokio::test]
async fn test_refresh_counts_are_unwindowed() {
    // Default settings window to the first three sessions; the sample has
    // exactly three, so extend it with a fourth.
    let mut csv = fixtures::SAMPLE_CSV.to_string();
    csv.push_str(
        "8/7/2025 7:50:01,2025-08-07,Morning,7 Jane Doe,6,2025-08-07 \u{2013} Morning\n",
    );
    let rows = sheet_client::parse_csv(&csv).expect("extended csv decodes");
    let ctx = TestContext::with_rows(rows);
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/api/refresh").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["session_count"], (SAMPLE_SESSION_COUNT + 1) as u64);
}

/// A fetch failure surfaces as a 500 with an error payload.
#[tokio::test]
async fn test_refresh_failure_is_500_with_message() {
    let ctx = TestContext::new();
    ctx.sheet.set_should_fail(true);
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/api/refresh").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "error");
    assert!(body["message"]
        .as_str()
        .unwrap_or_default()
        .contains("mock sheet unavailable"));
}

/// An empty sheet is a valid, zero-count dataset.
#[tokio::test]
async fn test_refresh_with_empty_sheet() {
    let ctx = TestContext::with_rows(Vec::new());
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/api/refresh").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["session_count"], 0);
    assert_eq!(body["athlete_count"], 0);
}
