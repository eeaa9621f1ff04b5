//! Sheet fetch and CSV decoding.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use rpe_core::{Error, RawRecord, Result};

use crate::config::SheetConfig;

/// Seam between the pipeline's callers and the row source.
///
/// The HTTP service, the refresh worker, and the test mocks all depend on
/// this trait rather than on the concrete client, so tests never need a
/// network.
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Fetches a fresh, complete snapshot of the source rows. Every
    /// invocation re-fetches in full; nothing is cached between calls.
    async fn fetch_rows(&self) -> Result<Vec<RawRecord>>;
}

/// HTTP client for the published CSV export.
pub struct SheetClient {
    config: SheetConfig,
    http: reqwest::Client,
}

impl SheetClient {
    pub fn new(config: SheetConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::fetch(format!("failed to build http client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }
}

#[async_trait]
impl RowSource for SheetClient {
    async fn fetch_rows(&self) -> Result<Vec<RawRecord>> {
        debug!(url = %self.config.url, "Fetching response sheet");

        let response = self
            .http
            .get(&self.config.url)
            .send()
            .await
            .map_err(|e| Error::fetch(format!("sheet unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Sheet returned non-success status");
            return Err(Error::fetch(format!("sheet returned status {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::fetch(format!("failed to read sheet body: {e}")))?;

        parse_csv(&body)
    }
}

/// Decodes the CSV export into raw records, header row included.
///
/// A UTF-8 BOM on the first header survives some export paths; strip it so
/// the schema check sees the real column name.
pub fn parse_csv(body: &str) -> Result<Vec<RawRecord>> {
    let body = body.strip_prefix('\u{feff}').unwrap_or(body);

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| Error::fetch(format!("malformed csv header: {e}")))?
        .clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| Error::fetch(format!("malformed csv row: {e}")))?;
        let mut row = RawRecord::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            row.set(header, value);
        }
        rows.push(row);
    }

    debug!(rows = rows.len(), "Decoded sheet body");
    Ok(rows)
}
