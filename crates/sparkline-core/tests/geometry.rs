// File: crates/sparkline-core/tests/geometry.rs
// Purpose: Validate canvas resolution and adaptive bar width.

use sparkline_core::types::{BAR_WIDTH_RATIO, MAX_BAR_WIDTH, MIN_BAR_WIDTH};
use sparkline_core::{compute_bar_width, resolve_canvas, Canvas, Margin, Size};

#[test]
fn container_size_with_default_margins() {
    let canvas = resolve_canvas(&Size::default(), (250.0, 30.0), &Margin::default());
    assert_eq!(
        canvas,
        Canvas { width: 250.0, height: 30.0, top: 3.0, bottom: 3.0, left: 5.0, right: 5.0 }
    );
    assert_eq!(canvas.plot_width(), 240.0);
    assert_eq!(canvas.plot_height(), 24.0);
}

#[test]
fn explicit_size_wins_per_dimension() {
    let explicit = Size::new(Some(100.0), None);
    let canvas = resolve_canvas(&explicit, (250.0, 30.0), &Margin::default());
    assert_eq!(canvas.width, 100.0);
    assert_eq!(canvas.height, 30.0);
}

#[test]
fn non_positive_explicit_size_falls_back_to_container() {
    let explicit = Size::new(Some(0.0), Some(-20.0));
    let canvas = resolve_canvas(&explicit, (250.0, 30.0), &Margin::default());
    assert_eq!(canvas.width, 250.0);
    assert_eq!(canvas.height, 30.0);
}

#[test]
fn negative_margins_clamp_to_zero() {
    let margin = Margin::new(-1.0, 2.0, -3.0, 4.0);
    let canvas = resolve_canvas(&Size::default(), (100.0, 50.0), &margin);
    assert_eq!(canvas.top, 0.0);
    assert_eq!(canvas.bottom, 2.0);
    assert_eq!(canvas.left, 0.0);
    assert_eq!(canvas.right, 4.0);
}

#[test]
fn oversized_margins_clamp_plot_area_to_zero() {
    let margin = Margin::new(40.0, 40.0, 60.0, 60.0);
    let canvas = resolve_canvas(&Size::default(), (100.0, 50.0), &margin);
    assert_eq!(canvas.plot_width(), 0.0);
    assert_eq!(canvas.plot_height(), 0.0);
}

#[test]
fn resolution_is_idempotent() {
    let explicit = Size::new(Some(250.0), Some(30.0));
    let margin = Margin::new(1.0, 2.0, 3.0, 4.0);
    let first = resolve_canvas(&explicit, (600.0, 400.0), &margin);
    let second = resolve_canvas(&explicit, (600.0, 400.0), &margin);
    assert_eq!(first, second);
}

#[test]
fn bar_width_clamps_high_and_low() {
    // Two points across 240px: the raw width (90) clamps to 50.
    assert_eq!(compute_bar_width(240.0, 2, BAR_WIDTH_RATIO), MAX_BAR_WIDTH);
    // 150 points across 150px: the raw width (0.75) clamps to 1.
    assert_eq!(compute_bar_width(150.0, 150, BAR_WIDTH_RATIO), MIN_BAR_WIDTH);
}

#[test]
fn bar_width_floors_fractional_slots() {
    assert_eq!(compute_bar_width(160.0, 4, BAR_WIDTH_RATIO), 30.0);
    assert_eq!(compute_bar_width(166.0, 4, BAR_WIDTH_RATIO), 31.0);
}

#[test]
fn zero_point_count_takes_upper_clamp() {
    assert_eq!(compute_bar_width(240.0, 0, BAR_WIDTH_RATIO), MAX_BAR_WIDTH);
}

#[test]
fn bar_width_is_non_increasing_in_point_count() {
    let mut previous = f64::INFINITY;
    for n in 1..=400 {
        let width = compute_bar_width(300.0, n, BAR_WIDTH_RATIO);
        assert!(width <= previous, "width grew at n={n}");
        assert!((MIN_BAR_WIDTH..=MAX_BAR_WIDTH).contains(&width));
        previous = width;
    }
}
