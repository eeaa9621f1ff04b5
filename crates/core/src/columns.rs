//! Source column names for the response sheet.
//!
//! The survey form writes these exact headers; the ingestor renames them to
//! the canonical field names on `CanonicalRecord`. Keep this table in sync
//! with the form: a renamed question is a schema break, not a parse error.

/// Submission timestamp written by the form backend.
pub const COL_SUBMITTED_AT: &str = "Timestamp";

/// Training date as entered by the athlete.
pub const COL_SESSION_DATE: &str = "Todays Date";

/// Morning/Afternoon selector.
pub const COL_SESSION_PERIOD: &str = "Morning or Afternoon Session";

/// Athlete display name, usually prefixed with a jersey number.
pub const COL_ATHLETE: &str = "Player Name";

/// The RPE question column.
pub const COL_RPE: &str = "What is your rate of perceived exertion?";

/// Composite session identifier maintained in the sheet.
pub const COL_SESSION_KEY: &str = "SessionKey";

/// Every column the ingestor requires. A missing entry fails the whole
/// batch with a schema error.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_SUBMITTED_AT,
    COL_SESSION_DATE,
    COL_SESSION_PERIOD,
    COL_ATHLETE,
    COL_RPE,
    COL_SESSION_KEY,
];
