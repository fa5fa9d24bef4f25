// File: crates/sparkline-core/src/data.rs
// Summary: Dataset normalization: raw JSON-shaped input to ordered, typed points.

use serde_json::Value;
use thiserror::Error;

use crate::options::SparklineOptions;
use crate::series::ChartFamily;

/// Argument of a point: a category label or a numeric position.
#[derive(Clone, Debug, PartialEq)]
pub enum Argument {
    Text(String),
    Number(f64),
}

impl std::fmt::Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Argument::Text(s) => f.write_str(s),
            Argument::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One normalized point. `value: None` is a gap. `index` is dense over the
/// kept points of a single normalization pass and is the identity used by
/// classification.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub argument: Argument,
    pub value: Option<f64>,
    pub index: usize,
}

/// External data-source collaborator. The core only ever asks whether the
/// data is there yet and, once it is, for the raw items.
pub trait DataSource {
    fn is_loaded(&self) -> bool;
    fn raw(&self) -> &[Value];
}

/// A source that is always ready; the common case for in-memory data.
pub struct LoadedSource(pub Vec<Value>);

impl DataSource for LoadedSource {
    fn is_loaded(&self) -> bool { true }
    fn raw(&self) -> &[Value] { &self.0 }
}

/// Result of a normalization pass against a possibly-unloaded source.
#[derive(Clone, Debug, PartialEq)]
pub enum NormalizeOutcome {
    /// Source not loaded yet; re-invoke on load completion.
    Pending,
    Ready(Vec<DataPoint>),
}

/// Non-fatal data-validation diagnostic, surfaced to the host as an
/// incident notification rather than an error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DataIncident {
    #[error("no usable points in data source")]
    NoUsablePoints,
}

/// Numeric reading of a raw item: numbers pass through, numeric strings
/// parse, everything else is not a number.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn argument_of(value: &Value) -> Argument {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(x) => Argument::Number(x),
            None => Argument::Text(n.to_string()),
        },
        Value::String(s) => Argument::Text(s.clone()),
        other => Argument::Text(other.to_string()),
    }
}

/// Normalize a raw dataset into ordered points.
///
/// Primitive items take their source position (as text) for an argument;
/// records are projected through the configured argument/value fields and
/// dropped entirely when either field is absent. Null and unparseable
/// values become gaps unless `ignore_empty_points` drops them. The winloss
/// family collapses every value to its sign after gap filtering. Total over
/// any input shape: items that fit no case are dropped, never an error.
pub fn normalize(raw: &[Value], options: &SparklineOptions) -> Vec<DataPoint> {
    let winloss = options.sparkline_type.family() == ChartFamily::WinLoss;
    let mut points = Vec::with_capacity(raw.len());

    for (pos, item) in raw.iter().enumerate() {
        let (argument, value) = match item {
            Value::Object(record) => {
                let arg = record.get(&options.argument_field);
                let val = record.get(&options.value_field);
                match (arg, val) {
                    (Some(arg), Some(val)) => (argument_of(arg), numeric(val)),
                    // Missing either configured field drops the record.
                    _ => continue,
                }
            }
            Value::Number(_) | Value::String(_) | Value::Null => {
                (Argument::Text(pos.to_string()), numeric(item))
            }
            // Nested arrays, booleans: not a point.
            _ => continue,
        };

        if options.ignore_empty_points && value.is_none() {
            continue;
        }

        let value = if winloss {
            value.map(|v| {
                if v > 0.0 {
                    1.0
                } else if v < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            })
        } else {
            value
        };

        let index = points.len();
        points.push(DataPoint { argument, value, index });
    }

    log::debug!("normalized {} of {} raw items", points.len(), raw.len());
    points
}

/// Normalize against a possibly-asynchronous source. Until the source
/// reports loaded, no downstream computation runs.
pub fn normalize_source(source: &dyn DataSource, options: &SparklineOptions) -> NormalizeOutcome {
    if !source.is_loaded() {
        return NormalizeOutcome::Pending;
    }
    NormalizeOutcome::Ready(normalize(source.raw(), options))
}

/// Data-validation check run after normalization. Empty or all-gap datasets
/// have nothing to plot.
pub fn diagnose(points: &[DataPoint]) -> Option<DataIncident> {
    if points.iter().all(|p| p.value.is_none()) {
        return Some(DataIncident::NoUsablePoints);
    }
    None
}
