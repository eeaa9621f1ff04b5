//! The full normalization pipeline, one synchronous pass.

use crate::error::Result;
use crate::ingest::{self, DatasetSummary, DroppedRow};
use crate::label::{format_label, SessionLabel};
use crate::matrix::{build_matrix, AthleteMatrix, DuplicatePolicy};
use crate::ordering::resolve_ordering;
use crate::record::RawRecord;
use crate::window::{select_window, SessionWindow, WindowPolicy};

/// Pipeline knobs. Both entry points (the HTTP service and the refresh
/// worker) run the same pipeline under these settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineSettings {
    pub window: WindowPolicy,
    pub duplicates: DuplicatePolicy,
}

/// Everything one pipeline invocation produces.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub window: SessionWindow,
    /// One label per window session, same order.
    pub labels: Vec<SessionLabel>,
    pub matrix: AthleteMatrix,
    /// Distinct counts over the full unwindowed dataset.
    pub summary: DatasetSummary,
    /// Rows excluded during ingestion, with reasons.
    pub dropped: Vec<DroppedRow>,
    /// How many labels needed the heuristic fallback.
    pub label_fallbacks: usize,
}

/// Runs ingest → ordering → window → labels → matrix over one immutable
/// snapshot of source rows. No state is shared with or carried into any
/// other invocation.
pub fn run(rows: &[RawRecord], settings: &PipelineSettings) -> Result<PipelineRun> {
    let outcome = ingest::ingest(rows)?;
    let summary = ingest::summarize(&outcome.records);
    let ordering = resolve_ordering(&outcome.records)?;
    let window = select_window(&ordering, settings.window, &outcome.records);

    let labels: Vec<SessionLabel> = window.sessions.iter().map(|key| format_label(key)).collect();
    let label_fallbacks = labels.iter().filter(|label| label.fallback).count();

    let matrix = build_matrix(&window.records, &window.sessions, settings.duplicates)?;

    Ok(PipelineRun {
        window,
        labels,
        matrix,
        summary,
        dropped: outcome.dropped,
        label_fallbacks,
    })
}
