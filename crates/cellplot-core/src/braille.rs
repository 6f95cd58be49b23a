//! Braille pixel resolution of a character cell.
//!
//! A braille character (U+2800..U+28FF) encodes a 2×4 dot matrix, so a line
//! chart drawn with braille has twice the cell resolution horizontally and four
//! times vertically. Scales map values to these dots ("pixels").

/// Braille pixel columns per cell.
pub const COL_MULT: i32 = 2;

/// Braille pixel rows per cell.
pub const ROW_MULT: i32 = 4;

/// Number of pixel columns covered by `cells` columns.
#[must_use]
pub const fn cols_to_pixels(cells: i32) -> i32 {
    cells * COL_MULT
}

/// Number of pixel rows covered by `cells` rows.
#[must_use]
pub const fn rows_to_pixels(cells: i32) -> i32 {
    cells * ROW_MULT
}

/// Column of the cell containing pixel column `px`.
#[must_use]
pub const fn pixel_to_col(px: i32) -> i32 {
    px.div_euclid(COL_MULT)
}

/// Row of the cell containing pixel row `py`.
#[must_use]
pub const fn pixel_to_row(py: i32) -> i32 {
    py.div_euclid(ROW_MULT)
}
