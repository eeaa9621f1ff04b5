//! Dashboard page assembly.
//!
//! The charts are inline SVG, so the page is a single self-contained
//! response with no asset round-trips. Styling stays minimal on purpose.

use std::fmt::Write;

use charts::ChartSet;
use rpe_core::PipelineRun;

/// Builds the full dashboard page for one pipeline run.
pub fn dashboard_page(run: &PipelineRun, chart_set: &ChartSet) -> String {
    let generated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    let mut session_items = String::new();
    for label in &run.labels {
        let _ = writeln!(
            session_items,
            "<li>{} ({})</li>",
            escape(&label.date_part),
            escape(&label.period_part)
        );
    }

    let dropped_note = if run.dropped.is_empty() {
        String::new()
    } else {
        format!(
            "<p class=\"note\">{} submission(s) were skipped as malformed.</p>",
            run.dropped.len()
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>RPE Dashboard</title>
<style>
body {{ font-family: sans-serif; margin: 2rem auto; max-width: 1100px; color: #333; }}
h1 {{ margin-bottom: 0.2rem; }}
.meta {{ color: #666; font-size: 0.9rem; }}
.note {{ color: #a65f00; }}
figure {{ margin: 2rem 0; }}
figure svg {{ max-width: 100%; height: auto; }}
</style>
</head>
<body>
<h1>RPE Dashboard</h1>
<p class="meta">Sessions in view: {window_count} of {session_count} &middot; Athletes: {athlete_count} &middot; Generated: {generated_at}</p>
{dropped_note}
<ul>
{session_items}</ul>
<figure>{average}</figure>
<figure>{distribution}</figure>
<figure>{athletes}</figure>
</body>
</html>
"#,
        window_count = run.window.sessions.len(),
        session_count = run.summary.session_count,
        athlete_count = run.matrix.rows.len(),
        generated_at = generated_at,
        dropped_note = dropped_note,
        session_items = session_items,
        average = chart_set.average,
        distribution = chart_set.distribution,
        athletes = chart_set.athletes,
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
