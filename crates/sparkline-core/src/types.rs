// File: crates/sparkline-core/src/types.rs
// Summary: Shared geometry types and tuning constants (margins, sizes, canvas).

/// Fraction of the raw value span added as padding on each side of the value range.
pub const RANGE_PAD_RATIO: f64 = 0.15;
/// Fraction of the per-point slot a bar occupies.
pub const BAR_WIDTH_RATIO: f64 = 0.75;
/// Lower clamp for a rendered bar, in pixels.
pub const MIN_BAR_WIDTH: f64 = 1.0;
/// Upper clamp for a rendered bar, in pixels.
pub const MAX_BAR_WIDTH: f64 = 50.0;

/// Screen margins around the plotting area, in pixels.
/// Contract: all fields are non-negative after `sanitized`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margin {
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self { top, bottom, left, right }
    }

    /// Copy with every side clamped to >= 0.
    pub fn sanitized(&self) -> Self {
        Self {
            top: self.top.max(0.0),
            bottom: self.bottom.max(0.0),
            left: self.left.max(0.0),
            right: self.right.max(0.0),
        }
    }

    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(3.0, 3.0, 5.0, 5.0)
    }
}

/// Explicit size option. A dimension participates only when it is a
/// positive finite number; otherwise the container measurement wins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Size {
    pub const fn new(width: Option<f64>, height: Option<f64>) -> Self {
        Self { width, height }
    }
}

/// Resolved plotting rectangle: raw size plus the margins echoed through
/// for downstream coordinate math.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Canvas {
    /// Horizontal space actually available for drawing, clamped at 0.
    pub fn plot_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    /// Vertical space actually available for drawing, clamped at 0.
    pub fn plot_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }
}
