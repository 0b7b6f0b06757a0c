use model::{CHART_PALETTE, MetricKind, Recommendation};

use super::*;

fn bars(current: f64, optimized: f64) -> [Bar; 2] {
    let rec = Recommendation { recommendation: "Downsize".into(), current_usage: current, optimized_usage: optimized };
    model::BarChart::from_recommendation(MetricKind::CpuUtilization, &rec).bars
}

#[test]
fn larger_value_fills_plot_height() {
    let rects = bar_geometry(&bars(80.0, 40.0), 200.0, 100.0);
    assert_eq!(rects.len(), 2);
    assert!((rects[0].height - 100.0).abs() < f64::EPSILON);
    assert!((rects[0].y).abs() < f64::EPSILON);
    assert!((rects[1].height - 50.0).abs() < f64::EPSILON);
    assert!((rects[1].y - 50.0).abs() < f64::EPSILON);
}

#[test]
fn zero_values_yield_zero_height_bars() {
    let rects = bar_geometry(&bars(0.0, 0.0), 200.0, 100.0);
    assert!(rects.iter().all(|r| r.height == 0.0 && (r.y - 100.0).abs() < f64::EPSILON));
}

#[test]
fn bars_keep_labels_and_palette_order() {
    let rects = bar_geometry(&bars(1.0, 2.0), 200.0, 100.0);
    assert_eq!(rects[0].label, "Current Usage");
    assert_eq!(rects[1].label, "Optimized Usage");
    assert_eq!(rects[0].color, CHART_PALETTE[0]);
    assert_eq!(rects[1].color, CHART_PALETTE[1]);
}

#[test]
fn bars_sit_side_by_side_without_overlap() {
    let rects = bar_geometry(&bars(1.0, 1.0), 200.0, 100.0);
    assert!(rects[0].x + rects[0].width <= rects[1].x);
    assert!(rects[1].x + rects[1].width <= 200.0);
}

#[test]
fn negative_and_nan_values_are_flat() {
    let rects = bar_geometry(&bars(-5.0, f64::NAN), 200.0, 100.0);
    assert!(rects.iter().all(|r| r.height == 0.0));
}

#[test]
fn empty_input_yields_nothing() {
    assert!(bar_geometry(&[], 200.0, 100.0).is_empty());
}

#[test]
fn format_value_drops_trailing_zeros_for_integers() {
    assert_eq!(format_value(42.0), "42");
    assert_eq!(format_value(12.345), "12.35");
}
