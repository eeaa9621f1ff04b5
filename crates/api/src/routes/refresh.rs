//! Freshness check endpoint.

use axum::{extract::State, Json};
use telemetry::metrics;
use tracing::{error, info};

use crate::response::{ApiError, RefreshResponse};
use crate::state::AppState;

/// GET /api/refresh - re-ingests the source and reports distinct session
/// and athlete counts over the full dataset, without windowing or
/// rendering. Cheap enough for clients to poll.
pub async fn refresh_handler(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let rows = state.source.fetch_rows().await.map_err(|e| {
        error!("Sheet fetch failed: {e}");
        ApiError(e)
    })?;

    let outcome = rpe_core::ingest(&rows).map_err(|e| {
        error!("Ingest failed: {e}");
        ApiError(e)
    })?;
    let summary = rpe_core::summarize(&outcome.records);

    metrics().rows_dropped.inc_by(outcome.dropped.len() as u64);

    info!(
        sessions = summary.session_count,
        athletes = summary.athlete_count,
        dropped = outcome.dropped.len(),
        "Freshness check"
    );

    Ok(Json(RefreshResponse::success(
        &summary,
        outcome.dropped.len(),
    )))
}
