//! In-process metrics collection.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A counter metric.
#[derive(Debug, Default)]
pub struct Counter(AtomicU64);

impl Counter {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    pub fn inc(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_by(&self, n: u64) {
        self.0.fetch_add(n, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// A gauge metric (can be set to any value).
#[derive(Debug, Default)]
pub struct Gauge(AtomicU64);

impl Gauge {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    pub fn set(&self, val: u64) {
        self.0.store(val, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Histogram for latency tracking.
#[derive(Debug)]
pub struct Histogram {
    /// Buckets: 5ms, 10ms, 25ms, 50ms, 100ms, 250ms, 500ms, 1s, 5s
    buckets: [AtomicU64; 9],
    sum: AtomicU64,
    count: AtomicU64,
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    const BUCKET_BOUNDS: [u64; 9] = [5, 10, 25, 50, 100, 250, 500, 1000, 5000];

    pub fn new() -> Self {
        Self {
            buckets: Default::default(),
            sum: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    /// Records a value in milliseconds.
    pub fn observe(&self, ms: u64) {
        self.sum.fetch_add(ms, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);

        for (i, &bound) in Self::BUCKET_BOUNDS.iter().enumerate() {
            if ms <= bound {
                self.buckets[i].fetch_add(1, Ordering::Relaxed);
                return;
            }
        }
        // Value exceeds all buckets, add to last
        self.buckets[8].fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    pub fn mean(&self) -> f64 {
        let count = self.count();
        if count == 0 {
            0.0
        } else {
            self.sum.load(Ordering::Relaxed) as f64 / count as f64
        }
    }
}

/// Collected metrics for the dashboard service.
#[derive(Debug, Default)]
pub struct Metrics {
    // Pipeline metrics
    pub pipeline_runs: Counter,
    pub pipeline_failures: Counter,
    pub rows_ingested: Counter,
    pub rows_dropped: Counter,
    /// Session labels that needed the heuristic fallback; watched as a
    /// data-quality signal for the sheet.
    pub label_fallbacks: Counter,

    // Batch refresh metrics
    pub refresh_runs: Counter,
    pub refresh_failures: Counter,

    // Latency
    pub pipeline_latency_ms: Histogram,

    // Gauges
    pub last_refresh_epoch: Gauge,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes a snapshot of current metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            timestamp: Utc::now(),
            pipeline_runs: self.pipeline_runs.get(),
            pipeline_failures: self.pipeline_failures.get(),
            rows_ingested: self.rows_ingested.get(),
            rows_dropped: self.rows_dropped.get(),
            label_fallbacks: self.label_fallbacks.get(),
            refresh_runs: self.refresh_runs.get(),
            refresh_failures: self.refresh_failures.get(),
            pipeline_latency_mean_ms: self.pipeline_latency_ms.mean(),
            last_refresh_epoch: self.last_refresh_epoch.get(),
        }
    }
}

/// A snapshot of metrics at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub timestamp: DateTime<Utc>,
    pub pipeline_runs: u64,
    pub pipeline_failures: u64,
    pub rows_ingested: u64,
    pub rows_dropped: u64,
    pub label_fallbacks: u64,
    pub refresh_runs: u64,
    pub refresh_failures: u64,
    pub pipeline_latency_mean_ms: f64,
    pub last_refresh_epoch: u64,
}

/// Global metrics registry.
pub static METRICS: std::sync::LazyLock<Metrics> = std::sync::LazyLock::new(Metrics::new);

/// Get the global metrics registry.
pub fn metrics() -> &'static Metrics {
    &METRICS
}
