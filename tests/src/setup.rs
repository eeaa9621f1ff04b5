//! Common test setup functions.

use std::sync::Arc;

use api::{router, state::AppState};
use axum::Router;
use rpe_core::{PipelineSettings, RawRecord};
use sheet_client::RowSource;

use crate::fixtures;
use crate::mocks::MockSheet;

/// Test context: the real router with all layers, over a mock sheet.
///
/// Exercises the production code paths end to end; only the network is
/// replaced, at the `RowSource` seam.
pub struct TestContext {
    pub sheet: MockSheet,
    pub router: Router,
}

impl TestContext {
    /// Context over the standard sample sheet with default settings.
    pub fn new() -> Self {
        Self::with_rows(fixtures::sample_rows())
    }

    /// Context over specific rows with default settings.
    pub fn with_rows(rows: Vec<RawRecord>) -> Self {
        Self::with_rows_and_settings(rows, PipelineSettings::default())
    }

    /// Context over specific rows and pipeline settings.
    pub fn with_rows_and_settings(rows: Vec<RawRecord>, settings: PipelineSettings) -> Self {
        let sheet = MockSheet::new(rows);
        let state = AppState::new(Arc::new(sheet.clone()) as Arc<dyn RowSource>, settings);
        let router = router(state);
        Self { sheet, router }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
