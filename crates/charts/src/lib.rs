//! SVG chart rendering for the RPE dashboard.
//!
//! Consumes the pipeline's outputs (the session window, the athlete
//! matrix, and the per-session labels) and produces three standalone SVG
//! documents. Each renderer owns its drawing surface for the duration of
//! one call; nothing is shared across calls or invocations.

pub mod average;
pub mod distribution;
pub mod stats;
pub mod surface;
pub mod trend;

mod frame;

use rpe_core::PipelineRun;

/// Fill and stroke colors shared by the renderers.
pub(crate) mod palette {
    /// Bars in the average chart.
    pub const BAR: &str = "#87ceeb";
    /// Box fills, cycled across sessions.
    pub const BOXES: [&str; 3] = ["#add8e6", "#f08080", "#90ee90"];
    /// Trend lines and markers.
    pub const LINE: &str = "#1f77b4";
    pub const GRID: &str = "#d9d9d9";
    pub const AXIS: &str = "#444444";
    pub const TEXT: &str = "#333333";
}

/// The three rendered artifacts of one pipeline run.
#[derive(Debug, Clone)]
pub struct ChartSet {
    /// Per-session average bar chart.
    pub average: String,
    /// Per-session distribution box plot.
    pub distribution: String,
    /// Per-athlete trend grid.
    pub athletes: String,
}

/// Renders all three charts from one pipeline run.
pub fn render_all(run: &PipelineRun) -> ChartSet {
    ChartSet {
        average: average::render(&run.window, &run.labels),
        distribution: distribution::render(&run.window, &run.labels),
        athletes: trend::render(&run.matrix, &run.labels),
    }
}
