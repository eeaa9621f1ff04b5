//! Average RPE per session, vertical bars.

use rpe_core::{SessionLabel, SessionWindow};

use crate::frame::{draw_rpe_frame, PlotArea};
use crate::palette;
use crate::stats;
use crate::surface::SvgSurface;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;

/// Renders the per-session average bar chart on a fresh surface.
///
/// Sessions with no submissions get no bar; the slot and its label stay so
/// the axis still reflects the window.
pub fn render(window: &SessionWindow, labels: &[SessionLabel]) -> String {
    let mut svg = SvgSurface::new(WIDTH, HEIGHT);
    let center_x = svg.width() / 2.0;
    let plot = PlotArea {
        left: 70.0,
        top: 60.0,
        width: WIDTH as f64 - 100.0,
        height: HEIGHT as f64 - 170.0,
    };

    draw_rpe_frame(&mut svg, &plot);

    let n = window.sessions.len();
    for (i, key) in window.sessions.iter().enumerate() {
        let values: Vec<f64> = window
            .records
            .iter()
            .filter(|record| &record.session_key == key)
            .map(|record| record.rpe)
            .collect();

        let center = plot.slot_center(i, n);
        let bar_width = plot.slot_width(n) * 0.6;

        if let Some(avg) = stats::mean(&values) {
            let top = plot.y(avg);
            svg.rect(
                center - bar_width / 2.0,
                top,
                bar_width,
                plot.bottom() - top,
                palette::BAR,
                0.7,
            );
            svg.text(
                center,
                top - 6.0,
                12.0,
                "middle",
                palette::TEXT,
                &format!("{avg:.1}"),
            );
        }

        if let Some(label) = labels.get(i) {
            svg.multiline_text(
                center,
                plot.bottom() + 22.0,
                12.0,
                "middle",
                palette::TEXT,
                &[&label.date_part, &label.period_part],
            );
        }
    }

    svg.text(
        center_x,
        32.0,
        18.0,
        "middle",
        palette::TEXT,
        "Average RPE per Session",
    );
    svg.text(
        center_x,
        HEIGHT as f64 - 14.0,
        13.0,
        "middle",
        palette::TEXT,
        "Session",
    );
    svg.vtext(22.0, plot.top + plot.height / 2.0, 13.0, palette::TEXT, "Average RPE");

    svg.finish()
}
