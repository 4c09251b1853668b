//! Locale-tolerant decimal parsing.

/// Error returned when text is not a finite decimal number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid decimal: {text:?}")]
pub struct InvalidDecimal {
    text: String,
}

impl InvalidDecimal {
    /// The text that failed to parse.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Parse a decimal number that may use either `,` or `.` as separator.
///
/// Every comma is replaced with a dot before parsing, so `"1,459"` and
/// `"1.459"` yield the same value. Thousands separators are not understood:
/// `"1.234,5"` is rejected and `"1,234"` reads as `1.234`.
///
/// Values that parse but are not finite (`"NaN"`, `"inf"`) are rejected.
///
/// # Examples
///
/// ```
/// use fuel_finder::domain::parse_decimal;
///
/// assert_eq!(parse_decimal("1,459").unwrap(), 1.459);
/// assert_eq!(parse_decimal("-3.7038").unwrap(), -3.7038);
/// assert!(parse_decimal("abc").is_err());
/// assert!(parse_decimal("NaN").is_err());
/// ```
pub fn parse_decimal(text: &str) -> Result<f64, InvalidDecimal> {
    let normalized = text.replace(',', ".");

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InvalidDecimal {
            text: text.to_string(),
        }),
    }
}
