//! Core normalization and session-windowing pipeline for RPE survey data.
//!
//! Pure and synchronous: raw tabular rows in, ordered sessions, labels,
//! and a dense athlete × session matrix out. Fetching, rendering, serving,
//! and scheduling live in the collaborator crates.

pub mod columns;
pub mod error;
pub mod ingest;
pub mod label;
pub mod matrix;
pub mod ordering;
pub mod pipeline;
pub mod record;
pub mod window;

pub use error::{Error, Result};
pub use ingest::{ingest, summarize, DatasetSummary, DroppedRow, IngestOutcome};
pub use label::{format_label, SessionLabel};
pub use matrix::{build_matrix, jersey_rank, AthleteMatrix, AthleteSeries, DuplicatePolicy};
pub use ordering::resolve_ordering;
pub use pipeline::{PipelineRun, PipelineSettings};
pub use record::{CanonicalRecord, RawRecord, SessionPeriod};
pub use window::{select_window, SessionWindow, WindowPolicy};
