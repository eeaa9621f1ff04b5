//! Application state shared across handlers.

use std::sync::Arc;

use rpe_core::PipelineSettings;
use sheet_client::RowSource;

/// Shared application state.
///
/// Deliberately holds no pipeline data: every request re-fetches the
/// source and recomputes from scratch, so concurrent requests are fully
/// independent.
#[derive(Clone)]
pub struct AppState {
    /// Row source (real sheet client in production, mock in tests).
    pub source: Arc<dyn RowSource>,
    /// Window and duplicate policies applied on every run.
    pub settings: PipelineSettings,
}

impl AppState {
    pub fn new(source: Arc<dyn RowSource>, settings: PipelineSettings) -> Self {
        Self { source, settings }
    }
}
