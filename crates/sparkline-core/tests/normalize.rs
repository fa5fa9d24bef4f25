// File: crates/sparkline-core/tests/normalize.rs
// Purpose: Validate dataset normalization over primitive, record, and garbage input.

use serde_json::json;
use sparkline_core::{
    diagnose, normalize, normalize_source, Argument, DataIncident, DataSource, LoadedSource,
    NormalizeOutcome, SparklineOptions, SparklineType,
};

#[test]
fn primitive_array_uses_positional_arguments() {
    let raw = vec![json!(1), json!(2)];
    let points = normalize(&raw, &SparklineOptions::default());

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].argument, Argument::Text("0".to_string()));
    assert_eq!(points[0].value, Some(1.0));
    assert_eq!(points[1].argument, Argument::Text("1".to_string()));
    assert_eq!(points[1].value, Some(2.0));
}

#[test]
fn numeric_strings_parse_as_values() {
    let raw = vec![json!("10"), json!("3"), json!("7")];
    let points = normalize(&raw, &SparklineOptions::default());

    assert_eq!(points.len(), 3);
    assert_eq!(points[0].value, Some(10.0));
    assert_eq!(points[1].value, Some(3.0));
    assert_eq!(points[2].value, Some(7.0));
}

#[test]
fn records_project_configured_fields() {
    let raw = vec![
        json!({ "arg": "0", "val": "10" }),
        json!({ "arg": "1", "val": 3 }),
        json!({ "arg": 2, "val": 13 }),
    ];
    let points = normalize(&raw, &SparklineOptions::default());

    assert_eq!(points.len(), 3);
    assert_eq!(points[0].argument, Argument::Text("0".to_string()));
    assert_eq!(points[0].value, Some(10.0));
    assert_eq!(points[2].argument, Argument::Number(2.0));
    assert_eq!(points[2].value, Some(13.0));
}

#[test]
fn records_missing_either_field_are_dropped() {
    let options = SparklineOptions::default().with_fields("arg", "count");
    let raw = vec![
        json!({ "arg": "a", "count": 1 }),
        json!({ "arg": "b" }),
        json!({ "count": 3 }),
        json!({ "arg": "d", "count": 4 }),
    ];
    let points = normalize(&raw, &options);

    // Only conforming records survive, with dense reassigned indices.
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].index, 0);
    assert_eq!(points[0].value, Some(1.0));
    assert_eq!(points[1].index, 1);
    assert_eq!(points[1].value, Some(4.0));
}

#[test]
fn null_values_stay_as_gaps_by_default() {
    let raw = vec![json!(1), json!(2), json!(null), json!(4)];
    let points = normalize(&raw, &SparklineOptions::default());

    assert_eq!(points.len(), 4);
    assert_eq!(points[2].value, None);
    assert_eq!(points[3].value, Some(4.0));
}

#[test]
fn ignore_empty_points_drops_gaps_and_renumbers() {
    let mut options = SparklineOptions::default();
    options.ignore_empty_points = true;
    let raw = vec![json!(1), json!(2), json!(null), json!(4)];
    let points = normalize(&raw, &options);

    assert_eq!(points.len(), 3);
    assert_eq!(points[2].value, Some(4.0));
    assert_eq!(points[2].index, 2);
    // Argument still reflects the source position.
    assert_eq!(points[2].argument, Argument::Text("3".to_string()));
}

#[test]
fn winloss_collapses_values_to_sign() {
    let options = SparklineOptions::new(SparklineType::WinLoss);
    let raw = vec![json!(10), json!(2), json!(0), json!(-1)];
    let points = normalize(&raw, &options);

    let values: Vec<_> = points.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![Some(1.0), Some(1.0), Some(0.0), Some(-1.0)]);
}

#[test]
fn garbage_input_normalizes_to_empty() {
    let raw = vec![json!([1, 2]), json!(true), json!([])];
    let points = normalize(&raw, &SparklineOptions::default());
    assert!(points.is_empty());
    assert_eq!(diagnose(&points), Some(DataIncident::NoUsablePoints));
}

#[test]
fn all_gap_dataset_raises_incident() {
    let raw = vec![json!(null), json!(null)];
    let points = normalize(&raw, &SparklineOptions::default());
    assert_eq!(points.len(), 2);
    assert_eq!(diagnose(&points), Some(DataIncident::NoUsablePoints));
}

struct UnloadedSource;

impl DataSource for UnloadedSource {
    fn is_loaded(&self) -> bool { false }
    fn raw(&self) -> &[serde_json::Value] { &[] }
}

#[test]
fn unloaded_source_yields_pending() {
    let options = SparklineOptions::default();
    assert_eq!(normalize_source(&UnloadedSource, &options), NormalizeOutcome::Pending);

    let loaded = LoadedSource(vec![json!(5)]);
    match normalize_source(&loaded, &options) {
        NormalizeOutcome::Ready(points) => assert_eq!(points.len(), 1),
        NormalizeOutcome::Pending => panic!("loaded source should be ready"),
    }
}
