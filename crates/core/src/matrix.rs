//! Athlete × session matrix.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::CanonicalRecord;

/// Rank used for athletes whose name carries no leading jersey number;
/// sorts after every numbered athlete.
const UNNUMBERED_RANK: u32 = u32::MAX;

/// How to resolve more than one submission for the same (athlete, session).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Keep the first submission in input order (the sheet's historical
    /// behavior).
    #[default]
    First,
    /// Keep the last submission in input order.
    Last,
    /// Average all submissions.
    Mean,
    /// Fail the build.
    Error,
}

/// One athlete's series across the window. `values[i]` aligns with the
/// matrix's `sessions[i]`; `None` marks a session with no submission:
/// explicitly absent, never zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AthleteSeries {
    pub athlete: String,
    pub values: Vec<Option<f64>>,
}

/// Dense athlete × session matrix, rows in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AthleteMatrix {
    /// Session keys, in window order.
    pub sessions: Vec<String>,
    /// One row per athlete seen in the filtered set, jersey-number order.
    /// Athletes with no submissions anywhere in the window do not appear.
    pub rows: Vec<AthleteSeries>,
}

impl AthleteMatrix {
    /// Athlete names in display order.
    pub fn athletes(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.athlete.as_str())
    }
}

/// Jersey-number rank for display ordering: the leading whitespace token
/// parsed as an integer, or the sentinel for unnumbered names.
pub fn jersey_rank(athlete: &str) -> u32 {
    athlete
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .unwrap_or(UNNUMBERED_RANK)
}

/// Builds the dense matrix for the window.
///
/// Every athlete present in `records` gets exactly one cell per window
/// session, a value or an explicit absence. Cells are resolved from the
/// matching records under the duplicate policy; with `First` (the
/// default), extra submissions are silently ignored.
pub fn build_matrix(
    records: &[CanonicalRecord],
    sessions: &[String],
    policy: DuplicatePolicy,
) -> Result<AthleteMatrix> {
    // Group by athlete, preserving encounter order for the sort tie-break.
    let mut order: Vec<&str> = Vec::new();
    let mut by_athlete: HashMap<&str, Vec<&CanonicalRecord>> = HashMap::new();
    for record in records {
        let submissions = by_athlete.entry(record.athlete.as_str()).or_default();
        if submissions.is_empty() {
            order.push(record.athlete.as_str());
        }
        submissions.push(record);
    }

    let mut rows = Vec::with_capacity(order.len());
    for athlete in order {
        let submissions = &by_athlete[athlete];
        let mut values = Vec::with_capacity(sessions.len());
        for session in sessions {
            values.push(resolve_cell(submissions, session, athlete, policy)?);
        }
        rows.push(AthleteSeries {
            athlete: athlete.to_string(),
            values,
        });
    }

    // Stable sort keeps encounter order among equal ranks.
    rows.sort_by_key(|row| jersey_rank(&row.athlete));

    Ok(AthleteMatrix {
        sessions: sessions.to_vec(),
        rows,
    })
}

fn resolve_cell(
    submissions: &[&CanonicalRecord],
    session: &str,
    athlete: &str,
    policy: DuplicatePolicy,
) -> Result<Option<f64>> {
    let matching: Vec<f64> = submissions
        .iter()
        .filter(|record| record.session_key == session)
        .map(|record| record.rpe)
        .collect();

    match (matching.as_slice(), policy) {
        ([], _) => Ok(None),
        ([only], _) => Ok(Some(*only)),
        (many, DuplicatePolicy::First) => Ok(Some(many[0])),
        (many, DuplicatePolicy::Last) => Ok(Some(many[many.len() - 1])),
        (many, DuplicatePolicy::Mean) => {
            Ok(Some(many.iter().sum::<f64>() / many.len() as f64))
        }
        (_, DuplicatePolicy::Error) => Err(Error::DuplicateSubmission {
            athlete: athlete.to_string(),
            key: session.to_string(),
        }),
    }
}
