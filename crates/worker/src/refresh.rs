//! One batch refresh: fetch, pipeline, render, write.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use rpe_core::{PipelineSettings, Result};
use sheet_client::RowSource;
use telemetry::metrics;

/// Artifact file names. Stable on purpose: shared-folder links and the
/// team chat pins point at these paths.
pub const AVERAGE_FILE: &str = "rpe_average.svg";
pub const DISTRIBUTION_FILE: &str = "rpe_distribution.svg";
pub const ATHLETES_FILE: &str = "rpe_athletes.svg";

/// What one refresh produced.
#[derive(Debug, Clone)]
pub struct RefreshReport {
    pub session_count: usize,
    pub athlete_count: usize,
    pub rows_dropped: usize,
    pub artifacts: Vec<PathBuf>,
}

/// Runs the full batch path once per call.
pub struct RefreshWorker {
    source: Arc<dyn RowSource>,
    settings: PipelineSettings,
    output_dir: PathBuf,
}

impl RefreshWorker {
    pub fn new(
        source: Arc<dyn RowSource>,
        settings: PipelineSettings,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source,
            settings,
            output_dir: output_dir.into(),
        }
    }

    /// Fetch → pipeline → render → write. Any failure aborts the run;
    /// partial results are never reported as success, and the next
    /// scheduled tick is the only retry.
    pub async fn run(&self) -> Result<RefreshReport> {
        let start = Instant::now();
        metrics().refresh_runs.inc();

        let rows = self.source.fetch_rows().await?;
        let run = rpe_core::pipeline::run(&rows, &self.settings)?;
        let chart_set = charts::render_all(&run);

        tokio::fs::create_dir_all(&self.output_dir).await?;

        let mut artifacts = Vec::with_capacity(3);
        for (name, document) in [
            (AVERAGE_FILE, &chart_set.average),
            (DISTRIBUTION_FILE, &chart_set.distribution),
            (ATHLETES_FILE, &chart_set.athletes),
        ] {
            let path = self.output_dir.join(name);
            tokio::fs::write(&path, document).await?;
            artifacts.push(path);
        }

        metrics().rows_dropped.inc_by(run.dropped.len() as u64);
        metrics().label_fallbacks.inc_by(run.label_fallbacks as u64);
        metrics()
            .last_refresh_epoch
            .set(chrono::Utc::now().timestamp() as u64);
        metrics()
            .pipeline_latency_ms
            .observe(start.elapsed().as_millis() as u64);

        let report = RefreshReport {
            session_count: run.window.sessions.len(),
            athlete_count: run.matrix.rows.len(),
            rows_dropped: run.dropped.len(),
            artifacts,
        };

        info!(
            sessions = report.session_count,
            athletes = report.athlete_count,
            dropped = report.rows_dropped,
            output_dir = %self.output_dir.display(),
            "Charts refreshed"
        );

        Ok(report)
    }
}
