//! Layout of the Y axis.

use crate::error::{AxisError, Dimension, Result};
use crate::label::Label;
use crate::scale::{YScale, YScaleMode};
use crate::sizing::{numeric_label, required_width_with, AXIS_WIDTH};
use crate::value::{Value, ValueFormatter, DEFAULT_NON_ZERO_DECIMALS};
use cellplot_core::{Point, Rect};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Inputs of the Y axis layout.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct YProperties {
    /// Smallest data value.
    pub min: f64,
    /// Largest data value.
    pub max: f64,
    /// Rows reserved at the bottom for the X axis, see
    /// [`required_height`](crate::required_height).
    pub req_x_height: i32,
    /// How the domain is derived from `min` and `max`.
    #[serde(default)]
    pub scale_mode: YScaleMode,
    /// Optional custom rendering of the labels.
    #[serde(skip)]
    pub value_formatter: Option<ValueFormatter>,
}

impl YProperties {
    /// Properties for data in `[min, max]` in anchored mode.
    #[must_use]
    pub fn new(min: f64, max: f64, req_x_height: i32) -> Self {
        Self {
            min,
            max,
            req_x_height,
            ..Self::default()
        }
    }

    /// Set the scale mode.
    #[must_use]
    pub const fn with_scale_mode(mut self, mode: YScaleMode) -> Self {
        self.scale_mode = mode;
        self
    }

    /// Render labels with `formatter` instead of the default precision policy.
    #[must_use]
    pub fn with_value_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.value_formatter = Some(std::sync::Arc::new(formatter));
        self
    }

    /// Columns the axis needs for these properties.
    #[must_use]
    pub fn required_width(&self) -> i32 {
        required_width_with(self.min, self.max, self.value_formatter.as_ref())
    }
}

impl fmt::Debug for YProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YProperties")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("req_x_height", &self.req_x_height)
            .field("scale_mode", &self.scale_mode)
            .field("value_formatter", &self.value_formatter.is_some())
            .finish()
    }
}

/// Computed layout of the Y axis.
#[derive(Debug, Clone, PartialEq)]
pub struct YDetails {
    /// Columns taken by the labels and the axis line.
    pub width: i32,
    /// Top end of the axis line.
    pub start: Point,
    /// Bottom end of the axis line, on the row of the X axis.
    pub end: Point,
    /// Scale of the graph.
    pub scale: YScale,
    /// Labels, bottom-most first.
    pub labels: Vec<Label>,
}

impl YDetails {
    /// Lays out a Y axis at the left edge of `canvas`.
    ///
    /// One column right of the axis stays free for the graph, and the bottom
    /// `req_x_height` rows are left to the X axis. A `req_x_height` of 0 is
    /// treated as 1, since the X axis line always takes a row. The axis takes
    /// no more columns than its widest label needs.
    ///
    /// # Errors
    ///
    /// Fails with [`AxisError::InvalidRange`] when `max < min` and with
    /// [`AxisError::CanvasTooSmall`] when the canvas cannot hold the labels
    /// or at least one graph row.
    pub fn new(canvas: Rect, props: &YProperties) -> Result<Self> {
        if props.max < props.min {
            return Err(AxisError::InvalidRange {
                min: props.min,
                max: props.max,
            });
        }

        let required = props.required_width();
        let max_width = canvas.width - 1;
        if max_width < required {
            return Err(AxisError::CanvasTooSmall {
                dimension: Dimension::Width,
                available: canvas.width,
                required: required + 1,
            });
        }

        // The X axis line needs a row even when no labels are reserved.
        let reserved = props.req_x_height.max(AXIS_WIDTH);
        let graph_height = canvas.height - reserved;
        if graph_height < 1 {
            return Err(AxisError::CanvasTooSmall {
                dimension: Dimension::Height,
                available: canvas.height,
                required: reserved + 1,
            });
        }

        let scale = YScale::new(
            props.min,
            props.max,
            graph_height,
            DEFAULT_NON_ZERO_DECIMALS,
            props.scale_mode,
        )?;
        let formatter = props.value_formatter.as_ref();

        let max_label_width = max_width - AXIS_WIDTH;
        let mut labels = y_labels(&scale, canvas.origin(), max_label_width, formatter)?;
        let widest = widest_label(&labels).max(required - AXIS_WIDTH);

        let width = if widest < max_label_width {
            labels = y_labels(&scale, canvas.origin(), widest, formatter)?;
            widest + AXIS_WIDTH
        } else {
            max_width
        };

        let axis_x = canvas.x + width - 1;
        debug!(
            "y axis: canvas={canvas:?} width={width} graph_height={graph_height} labels={}",
            labels.len()
        );

        Ok(Self {
            width,
            start: Point::new(axis_x, canvas.y),
            end: Point::new(axis_x, canvas.y + graph_height),
            scale,
            labels,
        })
    }
}

fn widest_label(labels: &[Label]) -> i32 {
    labels.iter().map(|l| l.value.width()).max().unwrap_or(0)
}

/// One label per graph row going up from the bottom row, skipping rows whose
/// text repeats a label already placed.
fn y_labels(
    scale: &YScale,
    origin: Point,
    label_width: i32,
    formatter: Option<&ValueFormatter>,
) -> Result<Vec<Label>> {
    let mut labels = Vec::new();
    let mut seen = HashSet::new();

    for row in (0..scale.graph_height).rev() {
        let label = row_label(scale, origin, row, label_width, formatter)?;
        if seen.insert(label.value.text().to_string()) {
            labels.push(label);
        }
    }
    Ok(labels)
}

/// Right-aligned label for the graph row `row`.
fn row_label(
    scale: &YScale,
    origin: Point,
    row: i32,
    label_width: i32,
    formatter: Option<&ValueFormatter>,
) -> Result<Label> {
    let value: Value = match formatter {
        Some(_) => numeric_label(scale.cell_value(row)?, formatter),
        None => scale.cell_label(row)?,
    };

    let x = (label_width - value.width()).clamp(0, (label_width - 1).max(0));
    let pos = Point::new(origin.x + x, origin.y + row);
    trace!("y label {:?} at {pos:?}", value.text());
    Ok(Label::new(value, pos))
}
