//! Mock implementations for testing.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

use rpe_core::{Error, RawRecord, Result};
use sheet_client::RowSource;

/// Mock row source serving canned rows from memory.
///
/// This implements the same `RowSource` trait as the real `SheetClient`,
/// so the router and the refresh worker run their production code paths
/// without a network. Rows can be swapped mid-test and a failure mode
/// simulates an unreachable sheet.
#[derive(Clone)]
pub struct MockSheet {
    rows: Arc<Mutex<Vec<RawRecord>>>,
    should_fail: Arc<Mutex<bool>>,
    fetch_count: Arc<Mutex<usize>>,
}

impl MockSheet {
    pub fn new(rows: Vec<RawRecord>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            should_fail: Arc::new(Mutex::new(false)),
            fetch_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Replace the rows served on the next fetch.
    pub fn set_rows(&self, rows: Vec<RawRecord>) {
        *self.rows.lock() = rows;
    }

    /// Set failure mode for testing error handling.
    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock() = fail;
    }

    /// How many times the source has been fetched.
    pub fn fetch_count(&self) -> usize {
        *self.fetch_count.lock()
    }
}

#[async_trait]
impl RowSource for MockSheet {
    async fn fetch_rows(&self) -> Result<Vec<RawRecord>> {
        *self.fetch_count.lock() += 1;
        if *self.should_fail.lock() {
            return Err(Error::fetch("mock sheet unavailable"));
        }
        Ok(self.rows.lock().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[tokio::test]
    async fn serves_canned_rows_and_counts_fetches() {
        let mock = MockSheet::new(fixtures::sample_rows());

        let rows = mock.fetch_rows().await.unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(mock.fetch_count(), 1);

        mock.set_rows(Vec::new());
        let rows = mock.fetch_rows().await.unwrap();
        assert!(rows.is_empty());
        assert_eq!(mock.fetch_count(), 2);
    }

    #[tokio::test]
    async fn failure_mode_returns_a_fetch_error() {
        let mock = MockSheet::new(Vec::new());
        mock.set_should_fail(true);

        let err = mock.fetch_rows().await.unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));
    }
}
