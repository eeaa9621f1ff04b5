//! Shared plot geometry for the RPE axis.

use crate::palette;
use crate::surface::SvgSurface;

/// RPE axis bounds. Charts clamp to the nominal 0–10 scale.
pub(crate) const RPE_MIN: f64 = 0.0;
pub(crate) const RPE_MAX: f64 = 10.0;

/// Rectangular plot area inside a surface's margins.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Vertical pixel position of an RPE value, clamped to the axis.
    pub fn y(&self, value: f64) -> f64 {
        let clamped = value.clamp(RPE_MIN, RPE_MAX);
        self.top + (1.0 - (clamped - RPE_MIN) / (RPE_MAX - RPE_MIN)) * self.height
    }

    /// Center x of slot `i` out of `n` equal-width slots.
    pub fn slot_center(&self, i: usize, n: usize) -> f64 {
        let n = n.max(1) as f64;
        self.left + (i as f64 + 0.5) / n * self.width
    }

    pub fn slot_width(&self, n: usize) -> f64 {
        self.width / n.max(1) as f64
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Draws gridlines, y tick labels, and the axis frame.
pub(crate) fn draw_rpe_frame(svg: &mut SvgSurface, plot: &PlotArea) {
    for tick in (0..=10).step_by(2) {
        let y = plot.y(tick as f64);
        svg.line(plot.left, y, plot.right(), y, palette::GRID, 1.0);
        svg.text(
            plot.left - 8.0,
            y + 4.0,
            12.0,
            "end",
            palette::TEXT,
            &tick.to_string(),
        );
    }
    svg.line(plot.left, plot.top, plot.left, plot.bottom(), palette::AXIS, 1.5);
    svg.line(
        plot.left,
        plot.bottom(),
        plot.right(),
        plot.bottom(),
        palette::AXIS,
        1.5,
    );
}
