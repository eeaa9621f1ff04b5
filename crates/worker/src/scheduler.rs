//! Fixed-interval refresh loop.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

use telemetry::{health, metrics};

use crate::refresh::RefreshWorker;

/// Drives the refresh worker on a fixed wall-clock cadence.
///
/// Strictly sequential: each run is awaited before the next tick is
/// taken, so invocations never overlap. A slow fetch delays the next
/// refresh rather than stacking a second one on top. A failed run is
/// logged and counted; the next tick is the only retry.
pub struct RefreshScheduler {
    worker: RefreshWorker,
    period: Duration,
}

impl RefreshScheduler {
    pub fn new(worker: RefreshWorker, period: Duration) -> Self {
        Self { worker, period }
    }

    /// Runs until the task is dropped. The first tick fires immediately,
    /// so the charts are populated at startup without waiting out a full
    /// period.
    pub async fn run(self) {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            match self.worker.run().await {
                Ok(report) => {
                    health().refresh.set_healthy();
                    info!(
                        sessions = report.session_count,
                        athletes = report.athlete_count,
                        "Scheduled refresh complete"
                    );
                }
                Err(e) => {
                    metrics().refresh_failures.inc();
                    health().refresh.set_unhealthy(e.to_string());
                    error!("Scheduled refresh failed: {e}");
                }
            }
        }
    }

    /// Spawns the loop on the runtime.
    pub fn start(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(self.run())
    }
}
