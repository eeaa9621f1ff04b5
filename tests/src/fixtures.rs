//! Shared fixtures mirroring the survey response sheet.
//!
//! The CSV goes through the real decoder (`sheet_client::parse_csv`), so
//! every test exercises the same header handling production sees. The
//! sample deliberately includes a mojibake session key, an unnumbered
//! athlete, and one malformed row.

use rpe_core::RawRecord;

/// A realistic export: three sessions, three athletes, one bad row.
///
/// Rows 4 and 5 carry the Windows-1252-decoded en dash (`â€“`) in their
/// session key, as seen in real exports; row 6 has an unparseable date
/// and must be dropped (and counted) by the ingestor.
pub const SAMPLE_CSV: &str = "\
Timestamp,Todays Date,Morning or Afternoon Session,Player Name,What is your rate of perceived exertion?,SessionKey
8/5/2025 7:45:12,2025-08-05,Morning,7 Jane Doe,6,2025-08-05 \u{2013} Morning
8/5/2025 7:51:40,2025-08-05,Morning,11 Alex Roe,7,2025-08-05 \u{2013} Morning
8/5/2025 17:02:09,2025-08-05,Afternoon,7 Jane Doe,8,2025-08-05 \u{2013} Afternoon
8/6/2025 7:48:33,2025-08-06,Morning,7 Jane Doe,5,2025-08-06 \u{e2}\u{20ac}\u{201c} Morning
8/6/2025 7:49:57,2025-08-06,Morning,Jane Smith,4,2025-08-06 \u{e2}\u{20ac}\u{201c} Morning
not-a-timestamp,someday,Morning,99 Bad Row,5,2025-08-06 \u{2013} Morning
";

/// Distinct sessions in [`SAMPLE_CSV`] after the bad row is dropped.
pub const SAMPLE_SESSION_COUNT: usize = 3;

/// Distinct athletes in [`SAMPLE_CSV`] after the bad row is dropped.
pub const SAMPLE_ATHLETE_COUNT: usize = 3;

/// Rows the ingestor must drop from [`SAMPLE_CSV`].
pub const SAMPLE_DROPPED_ROWS: usize = 1;

/// Decodes [`SAMPLE_CSV`] through the production CSV path.
pub fn sample_rows() -> Vec<RawRecord> {
    sheet_client::parse_csv(SAMPLE_CSV).expect("fixture csv decodes")
}

/// An export missing the SessionKey column entirely: a schema break.
pub const MISSING_COLUMN_CSV: &str = "\
Timestamp,Todays Date,Morning or Afternoon Session,Player Name,What is your rate of perceived exertion?
8/5/2025 7:45:12,2025-08-05,Morning,7 Jane Doe,6
";

/// Decodes [`MISSING_COLUMN_CSV`] through the production CSV path.
pub fn missing_column_rows() -> Vec<RawRecord> {
    sheet_client::parse_csv(MISSING_COLUMN_CSV).expect("fixture csv decodes")
}
