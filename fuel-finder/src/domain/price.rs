//! Fuel price type.

use std::fmt;

use super::decimal::parse_decimal;

/// Error returned when a price text is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPrice {
    #[error("price is empty")]
    Empty,

    #[error("price is not a number: {0:?}")]
    NotANumber(String),

    #[error("price is negative: {0:?}")]
    Negative(String),
}

/// A price per litre as published by the data source.
///
/// Keeps the source text for display next to its numeric value. The value is
/// always finite and non-negative.
///
/// # Examples
///
/// ```
/// use fuel_finder::domain::Price;
///
/// let price = Price::parse("1,459").unwrap();
/// assert_eq!(price.as_str(), "1,459");
/// assert_eq!(price.value(), 1.459);
///
/// assert!(Price::parse("-1.0").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    text: String,
    value: f64,
}

impl Price {
    pub fn parse(text: &str) -> Result<Self, InvalidPrice> {
        if text.is_empty() {
            return Err(InvalidPrice::Empty);
        }

        let value =
            parse_decimal(text).map_err(|_| InvalidPrice::NotANumber(text.to_string()))?;

        if value < 0.0 {
            return Err(InvalidPrice::Negative(text.to_string()));
        }

        // "-0" is a zero price
        let value = if value == 0.0 { 0.0 } else { value };

        Ok(Self {
            text: text.to_string(),
            value,
        })
    }

    /// The price exactly as the source wrote it.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
