//! Per-session RPE distribution, box plots.

use rpe_core::{SessionLabel, SessionWindow};

use crate::frame::{draw_rpe_frame, PlotArea};
use crate::palette;
use crate::stats;
use crate::surface::SvgSurface;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;

/// Renders the distribution box plot on a fresh surface.
///
/// Boxes span Q1–Q3 with the median marked; whiskers reach the most
/// extreme submissions within 1.5·IQR of the box, and anything beyond is
/// drawn as an outlier point.
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
        let mut values: Vec<f64> = window
            .records
            .iter()
            .filter(|record| &record.session_key == key)
            .map(|record| record.rpe)
            .collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let center = plot.slot_center(i, n);
        let box_width = plot.slot_width(n) * 0.4;
        let cap_width = box_width * 0.5;
        let fill = palette::BOXES[i % palette::BOXES.len()];

        if let Some(q) = stats::quartiles(&values) {
            let (low, high, outliers) = stats::whiskers(&values, &q);

            // Whisker stems and caps.
            svg.line(center, plot.y(low), center, plot.y(q.q1), palette::AXIS, 1.0);
            svg.line(center, plot.y(q.q3), center, plot.y(high), palette::AXIS, 1.0);
            for end in [low, high] {
                svg.line(
                    center - cap_width / 2.0,
                    plot.y(end),
                    center + cap_width / 2.0,
                    plot.y(end),
                    palette::AXIS,
                    1.0,
                );
            }

            // The box and its median line.
            svg.rect(
                center - box_width / 2.0,
                plot.y(q.q3),
                box_width,
                (plot.y(q.q1) - plot.y(q.q3)).max(1.0),
                fill,
                0.7,
            );
            svg.line(
                center - box_width / 2.0,
                plot.y(q.median),
                center + box_width / 2.0,
                plot.y(q.median),
                palette::AXIS,
                1.5,
            );

            for outlier in outliers {
                svg.circle(center, plot.y(outlier), 3.0, palette::AXIS);
            }
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
        "Distribution of RPE Responses per Session",
    );
    svg.text(
        center_x,
        HEIGHT as f64 - 14.0,
        13.0,
        "middle",
        palette::TEXT,
        "Session",
    );
    svg.vtext(
        22.0,
        plot.top + plot.height / 2.0,
        13.0,
        palette::TEXT,
        "RPE Distribution",
    );

    svg.finish()
}
