//! Unified error type for the RPE pipeline.
//!
//! Row-level parse failures are recovered at the ingestion boundary and
//! turned into drop reasons (see `ingest::DroppedRow`); everything that
//! escapes this crate as an `Err` is fatal for the invocation that raised
//! it. Label fallbacks are not errors at all; they are counted on the
//! pipeline run instead.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the pipeline and its collaborators.
#[derive(Debug, Error)]
pub enum Error {
    /// Source unreachable, returned a non-success status, or produced a
    /// body that could not be decoded as tabular rows.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// A required source column is missing from the sheet.
    #[error("schema error: missing required column `{0}`")]
    Schema(String),

    /// A malformed field in one specific row. Raised while canonicalizing
    /// a row and converted into a drop reason by the ingestor; callers of
    /// the pipeline never see it.
    #[error("parse error: {0}")]
    Parse(String),

    /// Two records share a session key but disagree on the derived sort
    /// key. Ordering cannot be made deterministic, so this fails the run
    /// rather than guessing.
    #[error("inconsistent sort keys for session `{key}`: {first} vs {second}")]
    KeyConsistency {
        key: String,
        first: String,
        second: String,
    },

    /// More than one submission for the same (athlete, session) under
    /// `DuplicatePolicy::Error`.
    #[error("duplicate submission for {athlete} in session `{key}`")]
    DuplicateSubmission { athlete: String, key: String },

    /// Artifact write failed in the batch path.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a fetch error.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create a schema error for a missing column.
    pub fn schema(column: impl Into<String>) -> Self {
        Self::Schema(column.into())
    }

    /// Create a row-level parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
