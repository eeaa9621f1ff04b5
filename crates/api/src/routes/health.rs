//! Health check endpoints.

use axum::{http::StatusCode, Json};
use telemetry::{health, metrics};

use crate::response::HealthResponse;

/// GET /health - Full health check.
pub async fn health_handler() -> Json<HealthResponse> {
    let report = health().report();

    Json(HealthResponse {
        status: format!("{:?}", report.status).to_lowercase(),
        sheet_connected: health().sheet.is_healthy(),
        last_refresh_ok: health().refresh.is_healthy(),
        last_refresh_epoch: metrics().last_refresh_epoch.get(),
        rows_dropped: metrics().rows_dropped.get(),
        label_fallbacks: metrics().label_fallbacks.get(),
    })
}

/// GET /health/ready - Readiness probe (can serve dashboards).
pub async fn ready_handler() -> StatusCode {
    if health().is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health/live - Liveness probe (service is running).
pub async fn live_handler() -> StatusCode {
    if health().is_alive() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
