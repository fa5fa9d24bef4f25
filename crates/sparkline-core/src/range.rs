// File: crates/sparkline-core/src/range.rs
// Summary: Argument-axis categories and padded value-axis bounds.

use crate::data::{Argument, DataPoint};
use crate::series::ChartFamily;

/// Argument-axis extent: a bounded category list for discrete rendering,
/// or an unbounded continuous axis.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgumentRange {
    Categories(Vec<Argument>),
    Continuous,
}

/// Value-axis bounds. `min`/`max` are always the padded computed bounds;
/// the visible fields are user overrides, present only when the option was
/// a finite number, and never alter the computed bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub min_visible: Option<f64>,
    pub max_visible: Option<f64>,
}

/// Distinct, order-preserving argument values for discrete families.
/// Line-like series stay continuous as long as every argument is numeric.
pub fn compute_argument_range(points: &[DataPoint], family: ChartFamily) -> ArgumentRange {
    let discrete = family.is_bar_shaped()
        || points.iter().any(|p| matches!(p.argument, Argument::Text(_)));
    if !discrete {
        return ArgumentRange::Continuous;
    }
    let mut categories: Vec<Argument> = Vec::with_capacity(points.len());
    for p in points {
        if !categories.contains(&p.argument) {
            categories.push(p.argument.clone());
        }
    }
    ArgumentRange::Categories(categories)
}

/// Padded value-axis bounds.
///
/// Both sides get `pad_ratio` of the raw span. Bar-shaped families then
/// clamp a bound back to zero when the raw data sits exactly on the
/// baseline, so bars grow from zero unless the data already crosses it.
/// An empty or all-gap dataset reads as a raw range of [0, 0].
pub fn compute_value_range(
    points: &[DataPoint],
    family: ChartFamily,
    min_value: Option<f64>,
    max_value: Option<f64>,
    pad_ratio: f64,
) -> ValueRange {
    let mut raw_min = f64::INFINITY;
    let mut raw_max = f64::NEG_INFINITY;
    for p in points {
        if let Some(v) = p.value {
            raw_min = raw_min.min(v);
            raw_max = raw_max.max(v);
        }
    }
    if !raw_min.is_finite() || !raw_max.is_finite() {
        raw_min = 0.0;
        raw_max = 0.0;
    }

    let pad = (raw_max - raw_min) * pad_ratio;
    let mut min = raw_min - pad;
    let mut max = raw_max + pad;
    if family.is_bar_shaped() {
        if raw_min == 0.0 {
            min = 0.0;
        }
        if raw_max == 0.0 {
            max = 0.0;
        }
    }

    let min_opt = min_value.filter(|v| v.is_finite());
    let max_opt = max_value.filter(|v| v.is_finite());
    let (min_visible, max_visible) = match (min_opt, max_opt) {
        // Swap misordered bounds rather than rejecting them.
        (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(lo)),
        other => other,
    };

    ValueRange { min, max, min_visible, max_visible }
}
