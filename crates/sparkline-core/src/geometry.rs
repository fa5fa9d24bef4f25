// File: crates/sparkline-core/src/geometry.rs
// Summary: Canvas resolution from size/margins and adaptive bar width.

use crate::types::{Canvas, Margin, Size, MAX_BAR_WIDTH, MIN_BAR_WIDTH};

fn usable(dim: Option<f64>) -> Option<f64> {
    dim.filter(|d| d.is_finite() && *d > 0.0)
}

/// Combine an explicit size option, the container's measured size, and the
/// margins into the final plotting rectangle. Each dimension falls back
/// to the container independently. Idempotent: same inputs, same canvas.
pub fn resolve_canvas(explicit: &Size, container: (f64, f64), margin: &Margin) -> Canvas {
    let (container_w, container_h) = container;
    let margin = margin.sanitized();
    Canvas {
        width: usable(explicit.width).unwrap_or(container_w.max(0.0)),
        height: usable(explicit.height).unwrap_or(container_h.max(0.0)),
        top: margin.top,
        bottom: margin.bottom,
        left: margin.left,
        right: margin.right,
    }
}

/// Per-bar pixel width for bar-shaped families: a fixed fraction of the
/// per-point slot, floored, clamped to [1, 50]. A zero point count takes the
/// upper clamp so the calculator never divides by zero.
pub fn compute_bar_width(plot_width: f64, point_count: usize, ratio: f64) -> f64 {
    if point_count == 0 {
        return MAX_BAR_WIDTH;
    }
    (plot_width.max(0.0) / point_count as f64 * ratio)
        .floor()
        .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
}
