//! Record types for the RPE pipeline.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One raw survey submission: source column name → raw cell value.
///
/// Values stay strings until the ingestor parses them; the sheet export
/// carries no type information.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    columns: HashMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.columns.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }
}

/// Time-of-day period of a training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPeriod {
    Morning,
    Afternoon,
}

impl SessionPeriod {
    /// Hours added to the session date when deriving the sort key.
    /// Morning sorts at the start of the day, Afternoon half a day later.
    pub fn offset_hours(self) -> i64 {
        match self {
            Self::Morning => 0,
            Self::Afternoon => 12,
        }
    }

    /// Parses the form's period column, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "morning" => Some(Self::Morning),
            "afternoon" => Some(Self::Afternoon),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
        }
    }
}

/// A survey row after column renaming and field parsing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalRecord {
    /// When the form backend recorded the submission.
    pub submitted_at: NaiveDateTime,
    /// Training date as entered by the athlete.
    pub session_date: NaiveDate,
    pub session_period: SessionPeriod,
    /// Display name, usually prefixed with a jersey number ("7 Jane Doe").
    pub athlete: String,
    /// Self-reported exertion, nominally 0–10. Range is not enforced here.
    pub rpe: f64,
    /// Composite identifier for the (date, period) pair, maintained in the
    /// sheet. Stable across reloads of the same source.
    pub session_key: String,
}

impl CanonicalRecord {
    /// Composite chronological sort key: session date plus the period
    /// offset. For any two records on the same date, Morning strictly
    /// precedes Afternoon.
    pub fn sort_key(&self) -> NaiveDateTime {
        self.session_date.and_time(NaiveTime::MIN)
            + Duration::hours(self.session_period.offset_hours())
    }
}
