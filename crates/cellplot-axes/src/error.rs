//! Error types for cellplot-axes.

use thiserror::Error;

/// Errors reported by scale construction and axis layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AxisError {
    /// The maximum of a value range is below its minimum.
    #[error("invalid range: max ({max}) cannot be less than min ({min})")]
    InvalidRange { min: f64, max: f64 },

    /// Negative number of data points on the X axis.
    #[error("invalid point count {0}, must be zero or positive")]
    InvalidPointCount(i32),

    /// A scale was asked to span fewer than one cell.
    #[error("invalid cell count {0}, a scale needs at least one cell")]
    InvalidCells(i32),

    /// The canvas cannot fit the axis.
    #[error("canvas too small: available {dimension} {available} is less than the required {required}")]
    CanvasTooSmall {
        dimension: Dimension,
        available: i32,
        required: i32,
    },

    /// A pixel or cell coordinate outside of the scale.
    #[error("coordinate {coord} out of bounds, must be in range 0 <= coord < {limit}")]
    CoordinateOutOfBounds { coord: i32, limit: i32 },

    /// A value outside of the scale's domain.
    #[error("value {value} out of bounds, must be in range {min} <= value <= {max}")]
    ValueOutOfBounds { value: f64, min: f64, max: f64 },
}

/// The canvas dimension an [`AxisError::CanvasTooSmall`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Columns.
    Width,
    /// Rows.
    Height,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Width => write!(f, "width"),
            Self::Height => write!(f, "height"),
        }
    }
}

/// Result alias for axis operations.
pub type Result<T> = std::result::Result<T, AxisError>;
