//! Layout of the X axis.

use crate::error::{AxisError, Dimension, Result};
use crate::label::{Label, LabelOrientation, XSpace};
use crate::scale::XScale;
use crate::sizing::{required_height, AXIS_WIDTH};
use crate::value::{Value, DEFAULT_NON_ZERO_DECIMALS};
use cellplot_core::{Point, Rect};
use log::{debug, trace};
use std::collections::HashMap;

/// Minimum number of columns between two X labels.
const MIN_X_LABEL_SPACING: i32 = 3;

/// Computed layout of the X axis.
#[derive(Debug, Clone, PartialEq)]
pub struct XDetails {
    /// Left end of the axis line, where it meets the Y axis.
    pub start: Point,
    /// Right end of the axis line.
    pub end: Point,
    /// Scale of the graph.
    pub scale: XScale,
    /// Labels, left to right.
    pub labels: Vec<Label>,
}

impl XDetails {
    /// Lays out an X axis along the bottom of `canvas`, starting at the
    /// column of the Y axis line `y_start`.
    ///
    /// Labels whose point index has an entry in `custom_labels` show that
    /// text instead of the index.
    ///
    /// # Errors
    ///
    /// Fails with [`AxisError::InvalidPointCount`] for a negative
    /// `num_points` and with [`AxisError::CanvasTooSmall`] when the canvas
    /// leaves no graph column or cannot hold the labels.
    pub fn new(
        num_points: i32,
        y_start: Point,
        canvas: Rect,
        custom_labels: &HashMap<i32, String>,
        orientation: LabelOrientation,
    ) -> Result<Self> {
        if num_points < 0 {
            return Err(AxisError::InvalidPointCount(num_points));
        }

        // The axis line plus at least one graph column.
        let usable_width = canvas.right() - y_start.x;
        if usable_width < AXIS_WIDTH + 1 {
            return Err(AxisError::CanvasTooSmall {
                dimension: Dimension::Width,
                available: usable_width,
                required: AXIS_WIDTH + 1,
            });
        }

        let labels_height = required_height(num_points, custom_labels, orientation);
        let usable_height = canvas.bottom() - y_start.y;
        if usable_height < labels_height + 1 {
            return Err(AxisError::CanvasTooSmall {
                dimension: Dimension::Height,
                available: usable_height,
                required: labels_height + 1,
            });
        }

        let graph_width = usable_width - AXIS_WIDTH;
        let scale = XScale::new(num_points, graph_width, DEFAULT_NON_ZERO_DECIMALS)?;

        let axis_y = canvas.bottom() - labels_height;
        let graph_zero = Point::new(y_start.x + AXIS_WIDTH, axis_y);
        let labels = x_labels(&scale, graph_zero, custom_labels, orientation)?;

        debug!(
            "x axis: canvas={canvas:?} points={num_points} graph_width={graph_width} labels={}",
            labels.len()
        );

        Ok(Self {
            start: Point::new(y_start.x, axis_y),
            end: Point::new(canvas.right() - 1, axis_y),
            scale,
            labels,
        })
    }
}

/// Places labels left to right, each at least [`MIN_X_LABEL_SPACING`]
/// columns after the previous one and no earlier than the column of the next
/// point index.
fn x_labels(
    scale: &XScale,
    graph_zero: Point,
    custom_labels: &HashMap<i32, String>,
    orientation: LabelOrientation,
) -> Result<Vec<Label>> {
    let mut space = XSpace::new(graph_zero, scale.graph_width);
    let mut labels = Vec::new();

    while let Some((label, index)) = col_label(scale, &space, custom_labels, orientation)? {
        space.sub(orientation.columns(&label.value))?;
        labels.push(label);

        let next = index + 1;
        if f64::from(next) > scale.max.value() {
            break;
        }

        let skip = (scale.value_to_cell(next) - space.relative()).max(MIN_X_LABEL_SPACING);
        if space.remaining() <= skip {
            break;
        }
        space.sub(skip)?;
    }
    Ok(labels)
}

/// Label for the current column of `space` with its point index, or `None`
/// when it does not fit into the remaining columns.
fn col_label(
    scale: &XScale,
    space: &XSpace,
    custom_labels: &HashMap<i32, String>,
    orientation: LabelOrientation,
) -> Result<Option<(Label, i32)>> {
    let value = scale.cell_label(space.relative())?;
    let index = value.number().unwrap_or_default() as i32;
    let value = match custom_labels.get(&index) {
        Some(text) => Value::text_value(text.as_str()),
        None => value,
    };

    if orientation.columns(&value) > space.remaining() {
        trace!("x label {:?} does not fit", value.text());
        return Ok(None);
    }

    let pos = space.label_pos();
    trace!("x label {:?} at {pos:?}", value.text());
    Ok(Some((Label::new(value, pos), index)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn num(text: &str, x: i32, y: i32) -> Label {
        Label::new(Value::new(text.parse().unwrap(), 2), Point::new(x, y))
    }

    fn text(text: &str, x: i32, y: i32) -> Label {
        Label::new(Value::text_value(text), Point::new(x, y))
    }

    fn scale(num_points: i32, graph_width: i32) -> XScale {
        XScale::new(num_points, graph_width, 2).unwrap()
    }

    fn details(
        num_points: i32,
        y_start: Point,
        canvas: Rect,
        orientation: LabelOrientation,
    ) -> Result<XDetails> {
        XDetails::new(num_points, y_start, canvas, &HashMap::new(), orientation)
    }

    #[test]
    fn test_fails_on_negative_point_count() {
        let err = details(-1, Point::ORIGIN, Rect::new(0, 0, 2, 3), LabelOrientation::Horizontal)
            .unwrap_err();
        assert_eq!(err, AxisError::InvalidPointCount(-1));
    }

    #[test]
    fn test_fails_when_canvas_too_narrow() {
        let err = details(1, Point::ORIGIN, Rect::new(0, 0, 1, 3), LabelOrientation::Horizontal)
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
    fn test_fails_when_canvas_too_short() {
        let err = details(1, Point::ORIGIN, Rect::new(0, 0, 3, 2), LabelOrientation::Horizontal)
            .unwrap_err();
        assert!(matches!(
            err,
            AxisError::CanvasTooSmall {
                dimension: Dimension::Height,
                ..
            }
        ));
    }

    #[test]
    fn test_smallest_canvas() {
        for orientation in [LabelOrientation::Horizontal, LabelOrientation::Vertical] {
            let got = details(0, Point::ORIGIN, Rect::new(0, 0, 2, 3), orientation).unwrap();
            let want = XDetails {
                start: Point::new(0, 1),
                end: Point::new(1, 1),
                scale: scale(0, 1),
                labels: vec![num("0", 1, 2)],
            };
            assert_eq!(got, want, "{orientation:?}");
        }
    }

    #[test]
    fn test_accounts_for_y_start() {
        let got =
            details(0, Point::new(2, 0), Rect::new(0, 0, 4, 5), LabelOrientation::Horizontal)
                .unwrap();
        assert_eq!(got.start, Point::new(2, 3));
        assert_eq!(got.end, Point::new(3, 3));
        assert_eq!(got.scale, scale(0, 1));
        assert_eq!(got.labels, vec![num("0", 3, 4)]);
    }

    #[test]
    fn test_vertical_labels_many_points() {
        let got =
            details(1000, Point::new(2, 0), Rect::new(0, 0, 10, 10), LabelOrientation::Vertical)
                .unwrap();
        assert_eq!(got.start, Point::new(2, 5));
        assert_eq!(got.end, Point::new(9, 5));
        assert_eq!(got.scale, scale(1000, 7));
        assert_eq!(got.labels, vec![num("0", 3, 6), num("615", 7, 6)]);
    }

    #[test]
    fn test_vertical_labels_shorter_max_index() {
        let got =
            details(999, Point::new(2, 0), Rect::new(0, 0, 10, 10), LabelOrientation::Vertical)
                .unwrap();
        assert_eq!(got.start, Point::new(2, 6));
        assert_eq!(got.end, Point::new(9, 6));
        assert_eq!(got.labels, vec![num("0", 3, 7), num("614", 7, 7)]);
    }

    #[test]
    fn test_custom_labels() {
        let custom: HashMap<i32, String> =
            [(0, "start".to_string()), (1, "end".to_string())].into_iter().collect();
        let got = XDetails::new(
            2,
            Point::new(5, 0),
            Rect::new(0, 0, 20, 10),
            &custom,
            LabelOrientation::Vertical,
        )
        .unwrap();
        assert_eq!(got.start, Point::new(5, 4));
        assert_eq!(got.end, Point::new(19, 4));
        assert_eq!(got.scale, scale(2, 14));
        assert_eq!(got.labels, vec![text("start", 6, 5), text("end", 19, 5)]);
    }

    #[test]
    fn test_custom_label_too_wide_is_dropped() {
        let custom: HashMap<i32, String> = [(0, "a very long label".to_string())].into_iter().collect();
        let got = XDetails::new(
            5,
            Point::ORIGIN,
            Rect::new(0, 0, 6, 3),
            &custom,
            LabelOrientation::Horizontal,
        )
        .unwrap();
        assert!(got.labels.is_empty());
    }

    #[test]
    fn test_horizontal_labels_keep_min_spacing() {
        let got =
            details(100, Point::ORIGIN, Rect::new(0, 0, 60, 3), LabelOrientation::Horizontal)
                .unwrap();
        assert!(got.labels.len() >= 3, "{:?}", got.labels);
        for pair in got.labels.windows(2) {
            let gap = pair[1].pos.x - (pair[0].pos.x + pair[0].value.width());
            assert!(gap >= MIN_X_LABEL_SPACING, "{pair:?}");
        }
    }

    proptest! {
        #[test]
        fn prop_labels_fit_and_advance(
            num_points in 0i32..5000,
            y_x in 0i32..10,
            width in 2i32..80,
            height in 3i32..12,
            vertical in any::<bool>(),
        ) {
            let orientation = if vertical { LabelOrientation::Vertical } else { LabelOrientation::Horizontal };
            let canvas = Rect::new(0, 0, width + y_x, height);
            if let Ok(d) = details(num_points, Point::new(y_x, 0), canvas, orientation) {
                prop_assert_eq!(d.start.y, d.end.y);
                prop_assert!(d.start.x < d.end.x);
                prop_assert!(d.end.x < canvas.right());

                let mut prev: Option<&Label> = None;
                for l in &d.labels {
                    prop_assert!(l.pos.x > d.start.x);
                    prop_assert!(l.pos.x + orientation.columns(&l.value) <= canvas.right());
                    prop_assert_eq!(l.pos.y, d.start.y + 1);
                    if !vertical {
                        prop_assert!(l.pos.y < canvas.bottom());
                    }
                    if let Some(p) = prev {
                        prop_assert!(l.pos.x >= p.pos.x + orientation.columns(&p.value));
                    }
                    prev = Some(l);
                }
            }
        }
    }
}
