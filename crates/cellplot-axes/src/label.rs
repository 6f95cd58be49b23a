//! Tick labels and the space they are placed into.

use crate::error::{AxisError, Dimension, Result};
use crate::value::Value;
use cellplot_core::Point;
use serde::{Deserialize, Serialize};

/// A value drawn at a cell position.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// What is drawn.
    pub value: Value,
    /// Where the first character of the label goes.
    pub pos: Point,
}

impl Label {
    /// Create a new label.
    #[must_use]
    pub const fn new(value: Value, pos: Point) -> Self {
        Self { value, pos }
    }
}

/// Direction in which the characters of X axis labels flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelOrientation {
    /// Characters run left to right along one row.
    #[default]
    Horizontal,
    /// Characters run top to bottom, one per row.
    Vertical,
}

impl LabelOrientation {
    /// Columns `value` consumes along the axis.
    #[must_use]
    pub fn columns(self, value: &Value) -> i32 {
        match self {
            Self::Horizontal => value.width(),
            Self::Vertical => 1,
        }
    }

    /// Rows `value` consumes below the axis.
    #[must_use]
    pub fn rows(self, value: &Value) -> i32 {
        match self {
            Self::Horizontal => 1,
            Self::Vertical => value.height(),
        }
    }
}

/// The columns under the X axis still free for labels.
///
/// Relative coordinates are zero based at the first graph column.
#[derive(Debug, Clone)]
pub(crate) struct XSpace {
    cur: i32,
    max: i32,
    graph_zero: Point,
}

impl XSpace {
    /// Space for `graph_width` columns starting at `graph_zero`, the point
    /// where the graph meets the X axis line.
    pub(crate) const fn new(graph_zero: Point, graph_width: i32) -> Self {
        Self {
            cur: 0,
            max: graph_width,
            graph_zero,
        }
    }

    /// Columns left.
    pub(crate) const fn remaining(&self) -> i32 {
        self.max - self.cur
    }

    /// Current graph column.
    pub(crate) const fn relative(&self) -> i32 {
        self.cur
    }

    /// Canvas position of a label at the current column, one row below the
    /// axis line.
    pub(crate) const fn label_pos(&self) -> Point {
        Point::new(self.graph_zero.x + self.cur, self.graph_zero.y + 1)
    }

    /// Consumes `size` columns from the start of the space.
    pub(crate) fn sub(&mut self, size: i32) -> Result<()> {
        if self.remaining() < size {
            return Err(AxisError::CanvasTooSmall {
                dimension: Dimension::Width,
                available: self.remaining(),
                required: size,
            });
        }
        self.cur += size;
        Ok(())
    }
}
