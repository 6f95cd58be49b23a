//! Displayable axis values.
//!
//! A [`Value`] is what ends up printed next to an axis: either a number
//! rendered with the label precision policy, or caller-supplied text.

use crate::numbers::{round_to_non_zero_places, scientific};
use std::fmt;
use std::sync::Arc;
use unicode_width::UnicodeWidthStr;

/// Number of non-zero decimal places used for all generated labels.
pub const DEFAULT_NON_ZERO_DECIMALS: i32 = 2;

/// Renderings longer than this switch to scientific notation.
const MAX_DECIMAL_TEXT_LEN: usize = 10;

/// Custom rendering of numeric label values, e.g. to append units.
pub type ValueFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// A number together with its rounded form and rendered text.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericValue {
    value: f64,
    rounded: f64,
    zero_decimals: i32,
    non_zero_decimals: i32,
    text: String,
}

impl NumericValue {
    /// Rounds `value` up to at most `non_zero_decimals` non-zero decimal places.
    #[must_use]
    pub fn new(value: f64, non_zero_decimals: i32) -> Self {
        let (rounded, zero_decimals) = round_to_non_zero_places(value, non_zero_decimals);
        let text = default_text(rounded, zero_decimals + non_zero_decimals);
        Self {
            value,
            rounded,
            zero_decimals,
            non_zero_decimals,
            text,
        }
    }

    /// Like [`NumericValue::new`], but rendered by `formatter`.
    ///
    /// The formatter receives the original, unrounded value.
    #[must_use]
    pub fn with_formatter(value: f64, non_zero_decimals: i32, formatter: &ValueFormatter) -> Self {
        let mut v = Self::new(value, non_zero_decimals);
        v.text = formatter(value);
        v
    }

    /// The original value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The value rounded up according to the precision policy.
    #[must_use]
    pub const fn rounded(&self) -> f64 {
        self.rounded
    }

    /// Number of zero decimals before the first non-zero decimal.
    #[must_use]
    pub const fn zero_decimals(&self) -> i32 {
        self.zero_decimals
    }

    /// Maximum number of non-zero decimal places kept.
    #[must_use]
    pub const fn non_zero_decimals(&self) -> i32 {
        self.non_zero_decimals
    }

    /// The rendered text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

fn default_text(rounded: f64, decimals: i32) -> String {
    if rounded.ceil() == rounded {
        return format!("{rounded:.0}");
    }

    let decimals = usize::try_from(decimals).unwrap_or(0);
    let text = format!("{rounded:.decimals$}");
    if text.len() > MAX_DECIMAL_TEXT_LEN {
        scientific(rounded)
    } else {
        text
    }
}

/// A tick label value.
#[derive(Debug, Clone)]
pub enum Value {
    /// A generated number.
    Numeric(NumericValue),
    /// Caller-supplied text, used verbatim.
    Text(String),
}

impl Value {
    /// A numeric value with the given precision.
    #[must_use]
    pub fn new(value: f64, non_zero_decimals: i32) -> Self {
        Self::Numeric(NumericValue::new(value, non_zero_decimals))
    }

    /// A numeric value rendered by a custom formatter.
    #[must_use]
    pub fn with_formatter(value: f64, non_zero_decimals: i32, formatter: &ValueFormatter) -> Self {
        Self::Numeric(NumericValue::with_formatter(value, non_zero_decimals, formatter))
    }

    /// A text value, never subject to rounding.
    #[must_use]
    pub fn text_value(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// The rendered text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Numeric(n) => n.text(),
            Self::Text(t) => t.as_str(),
        }
    }

    /// The number behind a numeric value.
    #[must_use]
    pub const fn number(&self) -> Option<f64> {
        match self {
            Self::Numeric(n) => Some(n.value()),
            Self::Text(_) => None,
        }
    }

    /// Columns the text occupies when drawn on one row.
    #[must_use]
    pub fn width(&self) -> i32 {
        i32::try_from(self.text().width()).unwrap_or(i32::MAX)
    }

    /// Rows the text occupies when drawn one character per row.
    #[must_use]
    pub fn height(&self) -> i32 {
        i32::try_from(self.text().chars().count()).unwrap_or(i32::MAX)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Numeric(a), Self::Numeric(b)) => a.text() == b.text(),
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl From<NumericValue> for Value {
    fn from(v: NumericValue) -> Self {
        Self::Numeric(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_text() {
        assert_eq!(Value::new(0.0, 2).text(), "0");
        assert_eq!(Value::new(3.0, 2).text(), "3");
        assert_eq!(Value::new(-1.0, 2).text(), "-1");
        assert_eq!(Value::new(615.0, 2).text(), "615");
    }

    #[test]
    fn test_decimal_text() {
        assert_eq!(Value::new(1.72, 2).text(), "1.72");
        assert_eq!(Value::new(3.88, 2).text(), "3.88");
        assert_eq!(Value::new(0.5, 2).text(), "0.50");
    }

    #[test]
    fn test_decimal_text_rounds_up() {
        assert_eq!(Value::new(3.0 / 7.0, 2).text(), "0.43");
        assert_eq!(Value::new(1.0 / 27.0, 2).text(), "0.038");
    }

    #[test]
    fn test_text_includes_leading_zero_decimals() {
        assert_eq!(Value::new(1.0 / 300.0, 2).text(), "0.0034");
    }

    #[test]
    fn test_long_text_uses_scientific_notation() {
        assert_eq!(Value::new(12_345_678.123, 2).text(), "1.23e+07");
        assert_eq!(Value::new(0.000_000_001_23, 2).text(), "1.30e-09");
    }

    #[test]
    fn test_numeric_accessors() {
        let v = NumericValue::new(0.0371, 2);
        assert_eq!(v.value(), 0.0371);
        assert!((v.rounded() - 0.038).abs() < 1e-12);
        assert_eq!(v.zero_decimals(), 1);
        assert_eq!(v.non_zero_decimals(), 2);
    }

    #[test]
    fn test_text_value_verbatim() {
        let v = Value::text_value("start");
        assert_eq!(v.text(), "start");
        assert_eq!(v.number(), None);
        assert_eq!(v.to_string(), "start");
    }

    #[test]
    fn test_formatter_replaces_text() {
        let formatter: ValueFormatter = Arc::new(|v| format!("{v}°C"));
        let v = Value::with_formatter(21.5, 2, &formatter);
        assert_eq!(v.text(), "21.5°C");
        assert_eq!(v.number(), Some(21.5));
        assert_eq!(v.width(), 6);
        assert_eq!(v.height(), 6);
    }

    #[test]
    fn test_equality_by_tag_and_text() {
        assert_eq!(Value::new(1.0, 2), Value::new(1.0, 2));
        assert_eq!(Value::new(0.999, 2), Value::new(1.0, 2));
        assert_ne!(Value::new(1.0, 2), Value::text_value("1"));
        assert_eq!(Value::text_value("a"), Value::text_value("a"));
    }

    #[test]
    fn test_width_counts_display_columns() {
        assert_eq!(Value::text_value("日本").width(), 4);
        assert_eq!(Value::text_value("日本").height(), 2);
    }
}
