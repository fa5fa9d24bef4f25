// File: crates/sparkline-core/src/series.rs
// Summary: Sparkline render types and the chart families they group into.

/// Render type of the sparkline series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SparklineType {
    Line,
    Spline,
    StepLine,
    Area,
    SplineArea,
    StepArea,
    Bar,         // discrete bars from the zero baseline
    WinLoss,     // bar-shaped, values collapsed to sign
}

impl Default for SparklineType {
    fn default() -> Self { SparklineType::Line }
}

/// Grouping of render types sharing range-padding and coloring policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartFamily {
    LineLike,
    BarLike,
    WinLoss,
}

impl SparklineType {
    pub const fn family(self) -> ChartFamily {
        match self {
            SparklineType::Line
            | SparklineType::Spline
            | SparklineType::StepLine
            | SparklineType::Area
            | SparklineType::SplineArea
            | SparklineType::StepArea => ChartFamily::LineLike,
            SparklineType::Bar => ChartFamily::BarLike,
            SparklineType::WinLoss => ChartFamily::WinLoss,
        }
    }
}

impl ChartFamily {
    /// Bar-shaped families render discrete shapes and anchor their value
    /// range at zero when the data does not cross it.
    pub const fn is_bar_shaped(self) -> bool {
        matches!(self, ChartFamily::BarLike | ChartFamily::WinLoss)
    }
}
