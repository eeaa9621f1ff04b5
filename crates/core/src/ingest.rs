//! Row ingestion: source columns → canonical records.
//!
//! Error policy per row: a malformed date, period, or RPE excludes only
//! that row and records why, so one bad submission never corrupts the
//! ordering for everyone else. A missing required column is different:
//! nothing downstream can work without it, so it fails the batch.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::columns::{
    COL_ATHLETE, COL_RPE, COL_SESSION_DATE, COL_SESSION_KEY, COL_SESSION_PERIOD, COL_SUBMITTED_AT,
    REQUIRED_COLUMNS,
};
use crate::error::{Error, Result};
use crate::record::{CanonicalRecord, RawRecord, SessionPeriod};

/// Date shapes the form export has been observed to produce.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y"];

/// Timestamp shapes for the submission column.
const TIMESTAMP_FORMATS: [&str; 3] = [
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// A row excluded during ingestion and the reason it was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedRow {
    /// Zero-based index of the row in the input sequence.
    pub index: usize,
    pub reason: String,
}

/// Result of ingesting one batch of raw rows.
#[derive(Debug, Clone, Default)]
pub struct IngestOutcome {
    pub records: Vec<CanonicalRecord>,
    pub dropped: Vec<DroppedRow>,
}

/// Distinct session/athlete counts over the full, unwindowed record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub session_count: usize,
    pub athlete_count: usize,
}

/// Normalizes raw survey rows into canonical records.
///
/// Pure transform: no I/O, no shared state. The input is one immutable
/// snapshot of the source.
pub fn ingest(rows: &[RawRecord]) -> Result<IngestOutcome> {
    if let Some(first) = rows.first() {
        for column in REQUIRED_COLUMNS {
            if !first.has_column(column) {
                return Err(Error::schema(column));
            }
        }
    }

    let mut outcome = IngestOutcome::default();
    for (index, row) in rows.iter().enumerate() {
        match canonicalize(row) {
            Ok(record) => outcome.records.push(record),
            Err(err) => outcome.dropped.push(DroppedRow {
                index,
                reason: err.to_string(),
            }),
        }
    }
    Ok(outcome)
}

/// Distinct session and athlete counts for the freshness endpoint.
pub fn summarize(records: &[CanonicalRecord]) -> DatasetSummary {
    let sessions: HashSet<&str> = records.iter().map(|r| r.session_key.as_str()).collect();
    let athletes: HashSet<&str> = records.iter().map(|r| r.athlete.as_str()).collect();
    DatasetSummary {
        session_count: sessions.len(),
        athlete_count: athletes.len(),
    }
}

fn canonicalize(row: &RawRecord) -> Result<CanonicalRecord> {
    let submitted_at = parse_timestamp(field(row, COL_SUBMITTED_AT)?)?;
    let session_date = parse_date(field(row, COL_SESSION_DATE)?)?;

    let period_raw = field(row, COL_SESSION_PERIOD)?;
    let session_period = SessionPeriod::parse(period_raw)
        .ok_or_else(|| Error::parse(format!("unrecognized session period `{period_raw}`")))?;

    let athlete = field(row, COL_ATHLETE)?.trim().to_string();
    if athlete.is_empty() {
        return Err(Error::parse("empty athlete name"));
    }

    let rpe_raw = field(row, COL_RPE)?;
    let rpe: f64 = rpe_raw
        .trim()
        .parse()
        .map_err(|_| Error::parse(format!("non-numeric rpe `{rpe_raw}`")))?;

    let session_key = field(row, COL_SESSION_KEY)?.trim().to_string();
    if session_key.is_empty() {
        return Err(Error::parse("empty session key"));
    }

    Ok(CanonicalRecord {
        submitted_at,
        session_date,
        session_period,
        athlete,
        rpe,
        session_key,
    })
}

fn field<'a>(row: &'a RawRecord, column: &str) -> Result<&'a str> {
    row.get(column)
        .ok_or_else(|| Error::parse(format!("missing value for `{column}`")))
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date);
        }
    }
    Err(Error::parse(format!("unparseable date `{value}`")))
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(ts);
        }
    }
    // The form occasionally writes a bare date into the timestamp column.
    parse_date(value).map(|date| date.and_time(NaiveTime::MIN))
}
