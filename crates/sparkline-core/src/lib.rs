// File: crates/sparkline-core/src/lib.rs
// Summary: Core library entry point; exports the sparkline computation API.

pub mod chart;
pub mod classify;
pub mod data;
pub mod geometry;
pub mod options;
pub mod range;
pub mod series;
pub mod theme;
pub mod types;

pub use chart::{Readiness, Sparkline};
pub use classify::{assign_roles, classify, style_for, PointRole, PointStyle};
pub use data::{
    diagnose, normalize, normalize_source, Argument, DataIncident, DataPoint, DataSource,
    LoadedSource, NormalizeOutcome,
};
pub use geometry::{compute_bar_width, resolve_canvas};
pub use options::SparklineOptions;
pub use range::{compute_argument_range, compute_value_range, ArgumentRange, ValueRange};
pub use series::{ChartFamily, SparklineType};
pub use theme::Palette;
pub use types::{Canvas, Margin, Size};
