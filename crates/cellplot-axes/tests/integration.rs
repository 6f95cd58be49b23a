//! Integration tests for cellplot-axes.
//!
//! These exercise the flow a line chart goes through: size queries first,
//! then the Y axis layout, then the X axis layout anchored at the Y axis.

use cellplot_axes::{
    required_height, required_width, AxisError, Dimension, LabelOrientation, XDetails, YDetails,
    YProperties, YScaleMode,
};
use cellplot_core::{Point, Rect};
use std::collections::HashMap;

fn layout(
    canvas: Rect,
    min: f64,
    max: f64,
    num_points: i32,
    custom: &HashMap<i32, String>,
    orientation: LabelOrientation,
) -> cellplot_axes::Result<(YDetails, XDetails)> {
    let req_x_height = required_height(num_points, custom, orientation);
    let y = YDetails::new(canvas, &YProperties::new(min, max, req_x_height))?;
    let x = XDetails::new(num_points, y.start, canvas, custom, orientation)?;
    Ok((y, x))
}

// =============================================================================
// Chart layout
// =============================================================================

#[test]
fn test_axes_meet_at_corner() {
    let canvas = Rect::new(0, 0, 40, 12);
    let (y, x) = layout(canvas, 0.0, 250.0, 100, &HashMap::new(), LabelOrientation::Horizontal)
        .unwrap();

    assert_eq!(y.end, x.start);
    assert_eq!(x.end, Point::new(39, 10));
    assert_eq!(y.start, Point::new(y.width - 1, 0));
    assert!(y.width >= required_width(0.0, 250.0));
}

#[test]
fn test_graph_area_is_free_of_labels() {
    let canvas = Rect::new(3, 2, 50, 20);
    let (y, x) = layout(canvas, -10.0, 90.0, 500, &HashMap::new(), LabelOrientation::Vertical)
        .unwrap();

    let graph = Rect::from_points(Point::new(y.start.x + 1, y.start.y), x.end);
    for label in y.labels.iter().chain(x.labels.iter()) {
        assert!(!graph.contains_point(&label.pos), "{label:?} inside {graph:?}");
    }
}

#[test]
fn test_first_x_label_is_first_point() {
    let canvas = Rect::new(0, 0, 30, 8);
    let (_, x) = layout(canvas, 0.0, 1.0, 60, &HashMap::new(), LabelOrientation::Horizontal)
        .unwrap();

    let first = &x.labels[0];
    assert_eq!(first.value.text(), "0");
    assert_eq!(first.pos, Point::new(x.start.x + 1, x.start.y + 1));
}

#[test]
fn test_custom_labels_replace_indexes() {
    let custom: HashMap<i32, String> = [(0, "Mon".to_string()), (6, "Sun".to_string())]
        .into_iter()
        .collect();
    let canvas = Rect::new(0, 0, 60, 10);
    let (_, x) = layout(canvas, 0.0, 10.0, 7, &custom, LabelOrientation::Vertical).unwrap();

    assert_eq!(x.labels[0].value.text(), "Mon");
    assert!(x.labels.iter().any(|l| l.value.text() == "Sun"));
}

#[test]
fn test_adaptive_mode_zooms_in() {
    let canvas = Rect::new(0, 0, 20, 10);
    let props = YProperties::new(100.0, 110.0, 2).with_scale_mode(YScaleMode::Adaptive);
    let y = YDetails::new(canvas, &props).unwrap();

    assert_eq!(y.labels[0].value.text(), "100");
    assert_eq!(y.scale.min.value(), 100.0);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_tiny_canvas_reports_dimension() {
    let err = layout(
        Rect::new(0, 0, 2, 2),
        0.0,
        5.0,
        3,
        &HashMap::new(),
        LabelOrientation::Horizontal,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AxisError::CanvasTooSmall {
            dimension: Dimension::Width,
            ..
        }
    ));
}

#[test]
fn test_error_messages() {
    let err = YDetails::new(Rect::new(0, 0, 10, 10), &YProperties::new(5.0, 1.0, 2)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid range: max (1) cannot be less than min (5)"
    );
}
