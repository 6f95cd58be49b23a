//! Axes for line charts drawn on a terminal cell grid.
//!
//! This crate sizes and lays out the two axes of a line chart whose data is
//! plotted in braille sub-cell resolution:
//! - Size queries: [`required_width`], [`required_height`]
//! - Scales: [`YScale`], [`XScale`]
//! - Layout: [`YDetails`], [`XDetails`]
//! - Labels: [`Value`], [`Label`]
//!
//! A chart first asks how much room the axes need, then lays out the Y axis
//! on the left and finally the X axis below the graph, starting where the Y
//! axis line ended.

mod error;
mod label;
mod numbers;
mod scale;
mod sizing;
mod value;
mod x_axis;
mod y_axis;

pub use error::{AxisError, Dimension, Result};
pub use label::{Label, LabelOrientation};
pub use scale::{XScale, YScale, YScaleMode};
pub use sizing::{required_height, required_width, required_width_with, AXIS_WIDTH};
pub use value::{NumericValue, Value, ValueFormatter, DEFAULT_NON_ZERO_DECIMALS};
pub use x_axis::XDetails;
pub use y_axis::{YDetails, YProperties};
