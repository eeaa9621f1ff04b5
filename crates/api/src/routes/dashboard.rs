//! Dashboard page handler.

use std::time::Instant;

use axum::{extract::State, response::Html};
use telemetry::metrics;
use tracing::{error, info};

use crate::html;
use crate::response::ApiError;
use crate::state::AppState;

/// GET / - runs the full pipeline on a fresh snapshot of the sheet and
/// returns the three charts embedded in a page.
///
/// Nothing is cached between requests; what the coach sees is always the
/// current sheet. Any pipeline failure becomes a 500 carrying the error
/// text.
pub async fn dashboard_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, ApiError> {
    let start = Instant::now();
    metrics().pipeline_runs.inc();

    let rows = state.source.fetch_rows().await.map_err(|e| {
        metrics().pipeline_failures.inc();
        error!("Sheet fetch failed: {e}");
        ApiError(e)
    })?;

    let run = rpe_core::pipeline::run(&rows, &state.settings).map_err(|e| {
        metrics().pipeline_failures.inc();
        error!("Pipeline failed: {e}");
        ApiError(e)
    })?;

    metrics()
        .rows_ingested
        .inc_by((rows.len() - run.dropped.len()) as u64);
    metrics().rows_dropped.inc_by(run.dropped.len() as u64);
    metrics().label_fallbacks.inc_by(run.label_fallbacks as u64);

    let chart_set = charts::render_all(&run);
    let page = html::dashboard_page(&run, &chart_set);

    let latency_ms = start.elapsed().as_millis() as u64;
    metrics().pipeline_latency_ms.observe(latency_ms);

    info!(
        sessions = run.window.sessions.len(),
        athletes = run.matrix.rows.len(),
        dropped = run.dropped.len(),
        label_fallbacks = run.label_fallbacks,
        latency_ms,
        "Dashboard rendered"
    );

    Ok(Html(page))
}
