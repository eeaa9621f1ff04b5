//! Chronological session ordering.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::error::{Error, Result};
use crate::record::CanonicalRecord;

/// Resolves the deduplicated, chronologically ordered list of session keys.
///
/// Ordering is a strict ascending sort by sort key (date + period offset),
/// derived solely from the records' (date, period) fields; submission
/// order and row insertion order do not matter. Ties between distinct keys
/// keep their first-seen position in the input, so the result is
/// deterministic for a given input sequence.
///
/// Records that share a session key but disagree on the derived sort key
/// are a data-quality violation: the resolve fails rather than guessing
/// which chronology is right.
pub fn resolve_ordering(records: &[CanonicalRecord]) -> Result<Vec<String>> {
    let mut seen: HashMap<&str, NaiveDateTime> = HashMap::new();
    let mut sessions: Vec<(String, NaiveDateTime)> = Vec::new();

    for record in records {
        let sort_key = record.sort_key();
        match seen.get(record.session_key.as_str()) {
            Some(existing) if *existing != sort_key => {
                return Err(Error::KeyConsistency {
                    key: record.session_key.clone(),
                    first: existing.to_string(),
                    second: sort_key.to_string(),
                });
            }
            Some(_) => {}
            None => {
                seen.insert(record.session_key.as_str(), sort_key);
                sessions.push((record.session_key.clone(), sort_key));
            }
        }
    }

    // Stable sort: equal sort keys keep first-seen order.
    sessions.sort_by_key(|(_, sort_key)| *sort_key);
    Ok(sessions.into_iter().map(|(key, _)| key).collect())
}
