//! End-to-end tests for the dashboard page.

use axum::http::StatusCode;
use axum_test::TestServer;
use integration_tests::fixtures;
use integration_tests::setup::TestContext;

/// The dashboard renders all three charts from a fresh snapshot.
#[tokio::test]
async fn test_dashboard_renders_three_charts() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/").await;
    response.assert_status_ok();

    let body = response.text();
    assert_eq!(body.matches("<svg").count(), 3);
    assert!(body.contains("RPE Dashboard"));
    assert_eq!(ctx.sheet.fetch_count(), 1);
}

/// Athletes appear in jersey order; the unnumbered athlete renders too.
#[tokio::test]
async fn test_dashboard_shows_athletes_in_jersey_order() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body = server.get("/").await.text();

    let jane = body.find("7 Jane Doe").expect("7 Jane Doe on the page");
    let alex = body.find("11 Alex Roe").expect("11 Alex Roe on the page");
    let smith = body.find("Jane Smith").expect("Jane Smith on the page");
    assert!(jane < alex && alex < smith, "athletes out of jersey order");
}

/// The mojibake session key renders as a clean date + period label.
#[tokio::test]
async fn test_dashboard_normalizes_mojibake_session_labels() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body = server.get("/").await.text();
    assert!(body.contains("2025-08-06"));
    assert!(!body.contains("\u{e2}\u{20ac}\u{201c}"), "mojibake leaked into the page");
}

/// Dropped rows are noted on the page, not silently discarded.
#[tokio::test]
async fn test_dashboard_notes_dropped_rows() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let body = server.get("/").await.text();
    assert!(body.contains("1 submission(s) were skipped as malformed."));
}

/// Every request re-fetches; nothing is cached between requests.
#[tokio::test]
async fn test_dashboard_refetches_per_request() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    server.get("/").await.assert_status_ok();
    server.get("/").await.assert_status_ok();
    assert_eq!(ctx.sheet.fetch_count(), 2);
}

/// A fetch failure surfaces as a 500 carrying the error text.
#[tokio::test]
async fn test_dashboard_fetch_failure_is_500_with_message() {
    let ctx = TestContext::new();
    ctx.sheet.set_should_fail(true);
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "error");
    assert!(
        body["message"]
            .as_str()
            .unwrap_or_default()
            .contains("mock sheet unavailable"),
        "error message should carry the fetch error text"
    );
}

/// A schema break (missing required column) surfaces as a 500.
#[tokio::test]
async fn test_dashboard_schema_error_is_500_with_message() {
    let ctx = TestContext::with_rows(fixtures::missing_column_rows());
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = response.json();
    assert!(
        body["message"]
            .as_str()
            .unwrap_or_default()
            .contains("SessionKey"),
        "error message should name the missing column"
    );
}

/// An empty sheet renders an empty dashboard rather than failing.
#[tokio::test]
async fn test_dashboard_with_empty_sheet() {
    let ctx = TestContext::with_rows(Vec::new());
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains("No submissions in the selected window"));
}
