//! Pre-flight size queries.
//!
//! A chart asks how much room the axes need before it knows its final
//! plotting area: the Y axis reports the columns it takes on the left, the X
//! axis the rows it takes at the bottom.

use crate::label::LabelOrientation;
use crate::value::{Value, ValueFormatter, DEFAULT_NON_ZERO_DECIMALS};
use std::collections::HashMap;

/// Cells taken by an axis line.
pub const AXIS_WIDTH: i32 = 1;

/// Columns needed by a Y axis showing values in `[min, max]`: the widest of
/// the two boundary labels, at least one column, plus the axis line.
///
/// Total for any finite inputs, including an inverted range.
#[must_use]
pub fn required_width(min: f64, max: f64) -> i32 {
    required_width_with(min, max, None)
}

/// Like [`required_width`], with labels rendered by `formatter`.
#[must_use]
pub fn required_width_with(min: f64, max: f64, formatter: Option<&ValueFormatter>) -> i32 {
    let widest = [min, max]
        .into_iter()
        .map(|v| numeric_label(v, formatter).width())
        .max()
        .unwrap_or(0)
        .max(1);
    widest + AXIS_WIDTH
}

/// Rows needed by an X axis with `num_points` points.
///
/// Horizontal labels take a single row. Vertical labels take one row per
/// character of the longest label, considering both the generated index labels
/// and `custom_labels`.
#[must_use]
pub fn required_height(
    num_points: i32,
    custom_labels: &HashMap<i32, String>,
    orientation: LabelOrientation,
) -> i32 {
    match orientation {
        // One row for the axis line, one for the labels.
        LabelOrientation::Horizontal => AXIS_WIDTH + 1,
        LabelOrientation::Vertical => {
            let generated = Value::new(f64::from(num_points), DEFAULT_NON_ZERO_DECIMALS).height();
            let custom = custom_labels
                .values()
                .map(|text| i32::try_from(text.chars().count()).unwrap_or(i32::MAX))
                .max()
                .unwrap_or(0);
            AXIS_WIDTH + generated.max(custom)
        }
    }
}

/// A generated numeric label at the default precision.
pub(crate) fn numeric_label(v: f64, formatter: Option<&ValueFormatter>) -> Value {
    match formatter {
        Some(f) => Value::with_formatter(v, DEFAULT_NON_ZERO_DECIMALS, f),
        None => Value::new(v, DEFAULT_NON_ZERO_DECIMALS),
    }
}
