//! End-to-end pipeline tests over the CSV fixtures.
//!
//! These run the decode → ingest → order → window → label → matrix chain
//! exactly as production does, asserting on the final shapes rather than
//! any one stage.

use integration_tests::fixtures;
use rpe_core::{pipeline, DuplicatePolicy, PipelineSettings, WindowPolicy};

fn settings(window: WindowPolicy) -> PipelineSettings {
    PipelineSettings {
        window,
        duplicates: DuplicatePolicy::default(),
    }
}

#[test]
fn full_run_over_the_sample_sheet() {
    let rows = fixtures::sample_rows();
    let run = pipeline::run(&rows, &settings(WindowPolicy::FirstN(3))).unwrap();

    // Chronological window: Morning before Afternoon, day by day. The
    // third key keeps its mojibake spelling; identity is untouched, only
    // display labels are cleaned.
    assert_eq!(run.window.sessions.len(), 3);
    assert!(run.window.sessions[0].ends_with("Morning"));
    assert!(run.window.sessions[1].ends_with("Afternoon"));
    assert!(run.window.sessions[2].starts_with("2025-08-06"));

    // Labels are clean despite the mojibake delimiter.
    assert_eq!(run.labels[2].date_part, "2025-08-06");
    assert_eq!(run.labels[2].period_part, "Morning");
    assert_eq!(run.label_fallbacks, 0);

    // Short codes for the trend axis.
    let codes: Vec<String> = run
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| label.short_code(i + 1))
        .collect();
    assert_eq!(codes, vec!["AM", "PM", "AM"]);

    // Matrix in jersey order, dense, with explicit absences.
    let athletes: Vec<&str> = run.matrix.athletes().collect();
    assert_eq!(athletes, vec!["7 Jane Doe", "11 Alex Roe", "Jane Smith"]);
    assert_eq!(run.matrix.rows[0].values, vec![Some(6.0), Some(8.0), Some(5.0)]);
    assert_eq!(run.matrix.rows[1].values, vec![Some(7.0), None, None]);
    assert_eq!(run.matrix.rows[2].values, vec![None, None, Some(4.0)]);

    // The malformed row is counted, not fatal.
    assert_eq!(run.dropped.len(), fixtures::SAMPLE_DROPPED_ROWS);
    assert_eq!(run.dropped[0].index, 5);

    // Full-dataset summary backs the freshness endpoint.
    assert_eq!(run.summary.session_count, fixtures::SAMPLE_SESSION_COUNT);
    assert_eq!(run.summary.athlete_count, fixtures::SAMPLE_ATHLETE_COUNT);
}

#[test]
fn window_policies_are_one_pipeline() {
    let rows = fixtures::sample_rows();

    let all = pipeline::run(&rows, &settings(WindowPolicy::All)).unwrap();
    let first_two = pipeline::run(&rows, &settings(WindowPolicy::FirstN(2))).unwrap();

    assert_eq!(all.window.sessions.len(), 3);
    assert_eq!(
        first_two.window.sessions,
        all.window.sessions[..2].to_vec()
    );
}

#[test]
fn permuted_input_yields_the_same_ordering() {
    let mut rows = fixtures::sample_rows();
    rows.reverse();
    let forward = pipeline::run(&fixtures::sample_rows(), &settings(WindowPolicy::All)).unwrap();
    let reversed = pipeline::run(&rows, &settings(WindowPolicy::All)).unwrap();

    assert_eq!(forward.window.sessions, reversed.window.sessions);
}

#[test]
fn schema_break_fails_the_run() {
    let rows = fixtures::missing_column_rows();
    let err = pipeline::run(&rows, &settings(WindowPolicy::All)).unwrap_err();
    assert!(err.to_string().contains("SessionKey"));
}

#[test]
fn charts_render_from_the_sample_run() {
    let rows = fixtures::sample_rows();
    let run = pipeline::run(&rows, &settings(WindowPolicy::FirstN(3))).unwrap();
    let chart_set = charts::render_all(&run);

    for doc in [
        &chart_set.average,
        &chart_set.distribution,
        &chart_set.athletes,
    ] {
        assert!(doc.starts_with("<svg"));
        assert!(doc.trim_end().ends_with("</svg>"));
    }
    // The trend grid titles every athlete.
    assert!(chart_set.athletes.contains("Jane Smith"));
}
