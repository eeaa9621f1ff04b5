//! Sheet source configuration.

use serde::{Deserialize, Serialize};

use rpe_core::{Error, Result};

/// Where and how to fetch the published CSV export of the response sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// CSV export URL (e.g. a Google Sheets
    /// `.../export?format=csv` link for the form's response sheet).
    pub url: String,
    /// Fetch timeout in seconds. The whole invocation fails fast after
    /// this rather than hanging on the source.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            url: "https://docs.google.com/spreadsheets/d/CHANGE_ME/export?format=csv"
                .to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SheetConfig {
    /// Rejects URLs that cannot possibly be fetched before a client is
    /// built around them.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.url)
            .map(|_| ())
            .map_err(|e| Error::fetch(format!("invalid sheet url `{}`: {e}", self.url)))
    }
}
