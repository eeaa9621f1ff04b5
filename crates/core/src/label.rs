//! Session label formatting.
//!
//! Session keys look like `"<date> – <period>"`. The delimiter has shown up
//! as an en-dash, an em-dash, a plain hyphen, and as mojibake where the
//! UTF-8 en-dash was decoded as Latin-1 somewhere upstream, once or twice.
//! All variants go through one normalization table; splitting happens on
//! the spaced separator only, so dates like `2025-08-05` survive intact.

/// Dash variants observed in session keys, all normalized to an ASCII
/// hyphen. `"\u{e2}\u{80}\u{93}"` is the en-dash's UTF-8 bytes read as
/// Latin-1, `"\u{e2}\u{20ac}\u{201c}"` the same read as Windows-1252, and
/// `"\u{c3}\u{a2}\u{80}\u{93}"` the double-decoded form. Input that still
/// carries other multi-byte artifacts after this table should be re-decoded
/// at the source, not patched here.
const DASH_VARIANTS: [&str; 5] = [
    "\u{2013}",                 // en dash
    "\u{2014}",                 // em dash
    "\u{c3}\u{a2}\u{80}\u{93}", // double-decoded en dash
    "\u{e2}\u{80}\u{93}",       // latin-1 decoded en dash
    "\u{e2}\u{20ac}\u{201c}",   // windows-1252 decoded en dash
];

/// Separator labels split on after normalization.
const SEPARATOR: &str = " - ";

/// Display label for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLabel {
    pub date_part: String,
    pub period_part: String,
    /// True when the key did not split into two parts and the heuristic
    /// fallback produced the label instead. Counted by the pipeline; the
    /// last-token heuristic can misread keys without a real period word.
    pub fallback: bool,
}

impl SessionLabel {
    /// Two-line form for axis ticks: date stacked over period.
    pub fn two_line(&self) -> String {
        format!("{}\n{}", self.date_part, self.period_part)
    }

    /// Short period code for dense axes. `position` is the 1-based index
    /// of the session within the current window, used for the synthetic
    /// label when the key never split cleanly.
    pub fn short_code(&self, position: usize) -> String {
        if self.fallback {
            return format!("S{position}");
        }
        let period = self.period_part.to_ascii_lowercase();
        if period.contains("morning") || period.contains("am") {
            "AM".to_string()
        } else if period.contains("afternoon") || period.contains("pm") {
            "PM".to_string()
        } else if period.starts_with('m') {
            "AM".to_string()
        } else {
            "PM".to_string()
        }
    }
}

/// Replaces every known dash variant with an ASCII hyphen.
pub fn normalize_delimiters(key: &str) -> String {
    let mut normalized = key.to_string();
    for variant in DASH_VARIANTS {
        if normalized.contains(variant) {
            normalized = normalized.replace(variant, "-");
        }
    }
    normalized
}

/// Parses a session key into a display label.
///
/// Total: any input produces a label. Keys that split into exactly two
/// non-empty parts on the normalized separator become `(date, period)`;
/// anything else falls back to the whole key plus its last whitespace
/// token, with the fallback marked on the result.
pub fn format_label(session_key: &str) -> SessionLabel {
    let normalized = normalize_delimiters(session_key);
    let parts: Vec<&str> = normalized.split(SEPARATOR).collect();
    if parts.len() == 2 {
        let date_part = parts[0].trim();
        let period_part = parts[1].trim();
        if !date_part.is_empty() && !period_part.is_empty() {
            return SessionLabel {
                date_part: date_part.to_string(),
                period_part: period_part.to_string(),
                fallback: false,
            };
        }
    }

    let date_part = session_key.trim().to_string();
    let period_part = match date_part.split_whitespace().last() {
        Some(token) if date_part.contains(char::is_whitespace) => token.to_string(),
        _ => date_part.clone(),
    };
    SessionLabel {
        date_part,
        period_part,
        fallback: true,
    }
}
