// File: crates/sparkline-core/src/options.rs
// Summary: Widget options that feed the core algorithms, with original defaults.

use crate::series::SparklineType;
use crate::types::{Margin, Size, BAR_WIDTH_RATIO, RANGE_PAD_RATIO};

/// Options controlling normalization, ranges, classification and geometry.
/// Only the options that affect the core algorithms live here; purely visual
/// options (line width, point size, tooltips) belong to the renderer.
#[derive(Clone, Debug)]
pub struct SparklineOptions {
    pub sparkline_type: SparklineType,
    /// Record field holding the argument; ignored for primitive arrays.
    pub argument_field: String,
    /// Record field holding the value; ignored for primitive arrays.
    pub value_field: String,
    /// Drop null-valued points instead of keeping them as gaps.
    pub ignore_empty_points: bool,
    pub show_first_last: bool,
    pub show_min_max: bool,
    /// User-requested visible bounds; accepted only when finite.
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    /// Ordinary winloss points at or above this value take the win color.
    pub winloss_threshold: f64,
    // Color overrides; `None` falls back to the palette defaults.
    pub first_last_color: Option<String>,
    pub min_color: Option<String>,
    pub max_color: Option<String>,
    pub bar_positive_color: Option<String>,
    pub bar_negative_color: Option<String>,
    pub win_color: Option<String>,
    pub loss_color: Option<String>,
    pub size: Size,
    pub margin: Margin,
    /// Overridable tuning knobs, themed in some hosts.
    pub range_pad_ratio: f64,
    pub bar_width_ratio: f64,
}

impl Default for SparklineOptions {
    fn default() -> Self {
        Self {
            sparkline_type: SparklineType::Line,
            argument_field: "arg".to_string(),
            value_field: "val".to_string(),
            ignore_empty_points: false,
            show_first_last: true,
            show_min_max: false,
            min_value: None,
            max_value: None,
            winloss_threshold: 0.0,
            first_last_color: None,
            min_color: None,
            max_color: None,
            bar_positive_color: None,
            bar_negative_color: None,
            win_color: None,
            loss_color: None,
            size: Size::default(),
            margin: Margin::default(),
            range_pad_ratio: RANGE_PAD_RATIO,
            bar_width_ratio: BAR_WIDTH_RATIO,
        }
    }
}

impl SparklineOptions {
    pub fn new(sparkline_type: SparklineType) -> Self {
        Self { sparkline_type, ..Self::default() }
    }

    pub fn with_type(mut self, sparkline_type: SparklineType) -> Self {
        self.sparkline_type = sparkline_type;
        self
    }

    pub fn with_fields(mut self, argument_field: impl Into<String>, value_field: impl Into<String>) -> Self {
        self.argument_field = argument_field.into();
        self.value_field = value_field.into();
        self
    }

    pub fn with_visible_bounds(mut self, min_value: Option<f64>, max_value: Option<f64>) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    pub fn with_markers(mut self, show_first_last: bool, show_min_max: bool) -> Self {
        self.show_first_last = show_first_last;
        self.show_min_max = show_min_max;
        self
    }

    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }
}
