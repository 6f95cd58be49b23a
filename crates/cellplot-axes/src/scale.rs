//! Scales of the X and Y axes.
//!
//! Both scales work in braille pixels (see [`cellplot_core::braille`]): a cell
//! holds 4 pixel rows and 2 pixel columns. One pixel is reserved for the
//! domain minimum, so a span of `n` pixels has `n - 1` steps. The step is a
//! [`NumericValue`], i.e. rounded up by the label precision policy, which keeps
//! every label on a "round" value.

use crate::error::{AxisError, Result};
use crate::value::{NumericValue, Value};
use cellplot_core::braille;
use serde::{Deserialize, Serialize};

/// How the Y scale picks its domain from the data range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YScaleMode {
    /// The domain always includes zero, so the chart reads from a zero
    /// baseline.
    #[default]
    Anchored,
    /// The domain is exactly the data range, maximizing resolution.
    Adaptive,
}

/// Scale of the Y axis.
#[derive(Debug, Clone, PartialEq)]
pub struct YScale {
    /// Minimum of the domain.
    pub min: NumericValue,
    /// Maximum of the domain.
    pub max: NumericValue,
    /// Value difference between two adjacent pixel rows.
    pub step: NumericValue,
    /// Height of the graph in cells.
    pub graph_height: i32,
    /// Mode the domain was derived with.
    pub mode: YScaleMode,
    braille_height: i32,
}

impl YScale {
    /// Creates a scale for data in `[min, max]` drawn over `graph_height`
    /// rows.
    pub fn new(
        min: f64,
        max: f64,
        graph_height: i32,
        non_zero_decimals: i32,
        mode: YScaleMode,
    ) -> Result<Self> {
        if max < min {
            return Err(AxisError::InvalidRange { min, max });
        }
        if graph_height < 1 {
            return Err(AxisError::InvalidCells(graph_height));
        }

        let braille_height = braille::rows_to_pixels(graph_height);
        let usable_pixels = braille_height - 1;

        let (min, max) = match mode {
            YScaleMode::Anchored => (min.min(0.0), max.max(0.0)),
            YScaleMode::Adaptive => (min, max),
        };
        let step = NumericValue::new((max - min) / f64::from(usable_pixels), non_zero_decimals);

        Ok(Self {
            min: NumericValue::new(min, non_zero_decimals),
            max: NumericValue::new(max, non_zero_decimals),
            step,
            graph_height,
            mode,
            braille_height,
        })
    }

    /// Maximum number of non-zero decimal places of values on this scale.
    #[must_use]
    pub const fn precision(&self) -> i32 {
        self.step.non_zero_decimals()
    }

    /// Height of the graph in braille pixels.
    #[must_use]
    pub const fn braille_height(&self) -> i32 {
        self.braille_height
    }

    /// Value of the pixel row `y`. Y coordinates grow down.
    pub fn pixel_to_value(&self, y: i32) -> Result<f64> {
        let pos = flip(y, self.braille_height)?;
        Ok(self.value_at(pos))
    }

    /// Pixel row that most closely represents `v`. Y coordinates grow down.
    pub fn value_to_pixel(&self, v: f64) -> Result<i32> {
        if v < self.min.value() || v > self.max.value() {
            return Err(AxisError::ValueOutOfBounds {
                value: v,
                min: self.min.value(),
                max: self.max.value(),
            });
        }
        flip(self.position(v), self.braille_height)
    }

    /// Row of the cell that most closely represents `v`, clamped to the
    /// graph.
    #[must_use]
    pub fn value_to_cell(&self, v: f64) -> i32 {
        let pos = self.position(v).clamp(0, self.braille_height - 1);
        braille::pixel_to_row(self.braille_height - 1 - pos)
    }

    /// Value of the cell row `y`, clamped to the graph.
    #[must_use]
    pub fn cell_to_value(&self, y: i32) -> f64 {
        let y = y.clamp(0, self.graph_height - 1);
        self.value_at(braille::rows_to_pixels(self.graph_height - 1 - y))
    }

    /// Value of the label placed next to the cell row `y`.
    pub fn cell_value(&self, y: i32) -> Result<f64> {
        let pos = flip(y, self.graph_height)?;
        Ok(self.value_at(braille::rows_to_pixels(pos)))
    }

    /// Label placed next to the cell row `y`.
    pub fn cell_label(&self, y: i32) -> Result<Value> {
        Ok(Value::new(self.cell_value(y)?, self.precision()))
    }

    /// Value at pixel `pos` counted up from the bottom of the graph.
    fn value_at(&self, pos: i32) -> f64 {
        if pos == 0 {
            self.min.rounded()
        } else if pos == self.braille_height - 1 {
            self.max.rounded()
        } else {
            self.min.value() + f64::from(pos) * self.step.rounded()
        }
    }

    /// Pixel counted up from the bottom of the graph, unclamped.
    fn position(&self, v: f64) -> i32 {
        if self.step.rounded() == 0.0 {
            return 0;
        }
        ((v - self.min.value()) / self.step.rounded()).round() as i32
    }
}

/// Scale of the X axis, mapping point indexes onto columns.
#[derive(Debug, Clone, PartialEq)]
pub struct XScale {
    /// Index of the first point.
    pub min: NumericValue,
    /// Index of the last point.
    pub max: NumericValue,
    /// Index difference between two adjacent pixel columns.
    pub step: NumericValue,
    /// Width of the graph in cells.
    pub graph_width: i32,
    braille_width: i32,
}

impl XScale {
    /// Creates a scale for `num_points` points drawn over `graph_width`
    /// columns.
    pub fn new(num_points: i32, graph_width: i32, non_zero_decimals: i32) -> Result<Self> {
        if num_points < 0 {
            return Err(AxisError::InvalidPointCount(num_points));
        }
        if graph_width < 1 {
            return Err(AxisError::InvalidCells(graph_width));
        }

        let braille_width = braille::cols_to_pixels(graph_width);
        let usable_pixels = braille_width - 1;

        let max = f64::from((num_points - 1).max(0));
        let step = NumericValue::new(max / f64::from(usable_pixels), non_zero_decimals);

        Ok(Self {
            min: NumericValue::new(0.0, non_zero_decimals),
            max: NumericValue::new(max, non_zero_decimals),
            step,
            graph_width,
            braille_width,
        })
    }

    /// Maximum number of non-zero decimal places of values on this scale.
    #[must_use]
    pub const fn precision(&self) -> i32 {
        self.step.non_zero_decimals()
    }

    /// Width of the graph in braille pixels.
    #[must_use]
    pub const fn braille_width(&self) -> i32 {
        self.braille_width
    }

    /// Point index at pixel column `x`, rounded half away from zero.
    pub fn pixel_to_value(&self, x: i32) -> Result<f64> {
        if x < 0 || x >= self.braille_width {
            return Err(AxisError::CoordinateOutOfBounds {
                coord: x,
                limit: self.braille_width,
            });
        }
        Ok(self.value_at(x))
    }

    /// Pixel column that most closely represents the point index `v`.
    pub fn value_to_pixel(&self, v: i32) -> Result<i32> {
        let fv = f64::from(v);
        if fv < self.min.value() || fv > self.max.rounded() {
            return Err(AxisError::ValueOutOfBounds {
                value: fv,
                min: self.min.value(),
                max: self.max.rounded(),
            });
        }
        Ok(self.position(fv))
    }

    /// Column of the cell that most closely represents the point index `v`,
    /// clamped to the graph.
    #[must_use]
    pub fn value_to_cell(&self, v: i32) -> i32 {
        let fv = f64::from(v).clamp(self.min.value(), self.max.rounded());
        braille::pixel_to_col(self.position(fv)).min(self.graph_width - 1)
    }

    /// Point index at the cell column `x`, clamped to the graph.
    #[must_use]
    pub fn cell_to_value(&self, x: i32) -> f64 {
        let x = x.clamp(0, self.graph_width - 1);
        self.value_at(braille::cols_to_pixels(x))
    }

    /// Label placed under the cell column `x`.
    pub fn cell_label(&self, x: i32) -> Result<Value> {
        let v = self.pixel_to_value(braille::cols_to_pixels(x))?;
        Ok(Value::new(v.round(), self.precision()))
    }

    fn value_at(&self, x: i32) -> f64 {
        if x == 0 {
            self.min.rounded()
        } else if x == self.braille_width - 1 {
            self.max.rounded()
        } else {
            (f64::from(x) * self.step.rounded()).round()
        }
    }

    fn position(&self, fv: f64) -> i32 {
        if self.step.rounded() == 0.0 {
            return 0;
        }
        (fv / self.step.rounded()).round() as i32
    }
}

/// Converts between a coordinate growing down and a position growing up.
fn flip(coord: i32, limit: i32) -> Result<i32> {
    if coord < 0 || coord >= limit {
        return Err(AxisError::CoordinateOutOfBounds { coord, limit });
    }
    Ok(limit - 1 - coord)
}
