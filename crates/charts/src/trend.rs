//! Per-athlete trend grid.
//!
//! One small line chart per athlete, four columns wide, wrapping into as
//! many rows as needed: the layout coaches scan for who spiked and who
//! sat out. Absent sessions break the line rather than plotting zero.

use rpe_core::{AthleteMatrix, AthleteSeries, SessionLabel};

use crate::frame::PlotArea;
use crate::palette;
use crate::surface::SvgSurface;

const COLUMNS: usize = 4;
const CELL_WIDTH: u32 = 300;
const CELL_HEIGHT: u32 = 230;
const HEADER_HEIGHT: u32 = 50;

/// Renders the athlete trend grid on a fresh surface.
pub fn render(matrix: &AthleteMatrix, labels: &[SessionLabel]) -> String {
    let athlete_count = matrix.rows.len();
    let grid_rows = ((athlete_count + COLUMNS - 1) / COLUMNS).max(1);
    let width = (COLUMNS as u32) * CELL_WIDTH;
    let height = HEADER_HEIGHT + (grid_rows as u32) * CELL_HEIGHT;

    let mut svg = SvgSurface::new(width, height);
    let center_x = svg.width() / 2.0;
    svg.text(
        center_x,
        30.0,
        18.0,
        "middle",
        palette::TEXT,
        "Athlete RPE Trends",
    );

    if athlete_count == 0 {
        svg.text(
            center_x,
            svg.height() / 2.0,
            14.0,
            "middle",
            palette::TEXT,
            "No submissions in the selected window",
        );
        return svg.finish();
    }

    for (index, series) in matrix.rows.iter().enumerate() {
        let col = index % COLUMNS;
        let row = index / COLUMNS;
        let origin_x = (col as u32 * CELL_WIDTH) as f64;
        let origin_y = (HEADER_HEIGHT + row as u32 * CELL_HEIGHT) as f64;
        draw_cell(&mut svg, origin_x, origin_y, series, labels);
    }

    svg.finish()
}

fn draw_cell(
    svg: &mut SvgSurface,
    origin_x: f64,
    origin_y: f64,
    series: &AthleteSeries,
    labels: &[SessionLabel],
) {
    let plot = PlotArea {
        left: origin_x + 42.0,
        top: origin_y + 32.0,
        width: CELL_WIDTH as f64 - 62.0,
        height: CELL_HEIGHT as f64 - 84.0,
    };

    svg.text(
        origin_x + CELL_WIDTH as f64 / 2.0,
        origin_y + 20.0,
        12.0,
        "middle",
        palette::TEXT,
        &series.athlete,
    );

    // Sparse axis: endpoints and midpoint only, to keep the cells quiet.
    for tick in [0.0, 5.0, 10.0] {
        let y = plot.y(tick);
        svg.line(plot.left, y, plot.right(), y, palette::GRID, 0.5);
        svg.text(
            plot.left - 6.0,
            y + 3.0,
            9.0,
            "end",
            palette::TEXT,
            &format!("{tick:.0}"),
        );
    }
    svg.line(plot.left, plot.top, plot.left, plot.bottom(), palette::AXIS, 1.0);
    svg.line(
        plot.left,
        plot.bottom(),
        plot.right(),
        plot.bottom(),
        palette::AXIS,
        1.0,
    );

    let n = series.values.len();

    // Connect consecutive submissions; an absent session breaks the line.
    let mut segment: Vec<(f64, f64)> = Vec::new();
    for (i, value) in series.values.iter().enumerate() {
        match value {
            Some(rpe) => {
                let point = (plot.slot_center(i, n), plot.y(*rpe));
                segment.push(point);
                svg.circle(point.0, point.1, 3.0, palette::LINE);
            }
            None => {
                svg.polyline(&segment, palette::LINE, 2.0);
                segment.clear();
            }
        }
    }
    svg.polyline(&segment, palette::LINE, 2.0);

    for i in 0..n {
        let code = labels
            .get(i)
            .map(|label| label.short_code(i + 1))
            .unwrap_or_else(|| format!("S{}", i + 1));
        svg.text(
            plot.slot_center(i, n),
            plot.bottom() + 16.0,
            10.0,
            "middle",
            palette::TEXT,
            &code,
        );
    }
}
