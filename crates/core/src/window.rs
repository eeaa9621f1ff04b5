//! Session window selection.
//!
//! The "all sessions" and "first N sessions" views are one pipeline under
//! different policies; there is deliberately no second code path.

use std::collections::HashSet;

use crate::record::CanonicalRecord;

/// How much of the session ordering to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPolicy {
    /// The first `n` sessions in chronological order. Shorter orderings
    /// are taken whole; fewer sessions than `n` is the normal state early
    /// in a season, not an error.
    FirstN(usize),
    /// Every session.
    All,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self::FirstN(3)
    }
}

/// The selected slice of the session ordering plus the records in it.
#[derive(Debug, Clone, Default)]
pub struct SessionWindow {
    /// Session keys, in chronological order.
    pub sessions: Vec<String>,
    /// Records whose session key is in `sessions`. Relative order within
    /// this set is unspecified; downstream stages must not depend on it.
    pub records: Vec<CanonicalRecord>,
}

/// Applies the window policy to the ordering and filters records to it.
pub fn select_window(
    ordering: &[String],
    policy: WindowPolicy,
    records: &[CanonicalRecord],
) -> SessionWindow {
    let sessions: Vec<String> = match policy {
        WindowPolicy::FirstN(n) => ordering.iter().take(n).cloned().collect(),
        WindowPolicy::All => ordering.to_vec(),
    };

    let selected: HashSet<&str> = sessions.iter().map(String::as_str).collect();
    let records = records
        .iter()
        .filter(|record| selected.contains(record.session_key.as_str()))
        .cloned()
        .collect();

    SessionWindow { sessions, records }
}
