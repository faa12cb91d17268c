//! Non-negative decimal price type.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("price must be a decimal number")]
    NotANumber,
    /// The value is below zero.
    #[error("price cannot be negative")]
    Negative,
}

/// A catalog price.
///
/// Prices are decimal (never floating point) and never negative. Garbage
/// input such as `"abc"` is rejected at parse time rather than propagated
/// as a not-a-number value.
///
/// ## Examples
///
/// ```
/// use ladle_core::Price;
///
/// assert!(Price::parse("9.99").is_ok());
/// assert!(Price::parse("0").is_ok());
///
/// assert!(Price::parse("").is_err());      // empty
/// assert!(Price::parse("free").is_err());  // not a number
/// assert!(Price::parse("-1").is_err());    // negative
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Parse a `Price` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, is not a decimal number,
    /// or is negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }

        let amount: Decimal = trimmed.parse().map_err(|_| PriceError::NotANumber)?;

        Self::from_decimal(amount)
    }

    /// Create a `Price` from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Negative` if the amount is below zero.
    pub fn from_decimal(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_zero() {
            // "-0" normalizes to plain zero.
            return Ok(Self::ZERO);
        }
        if amount.is_sign_negative() {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount))
    }

    /// Returns the amount as a decimal.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_valid_prices() {
        assert_eq!(Price::parse("9.99").unwrap().amount(), dec("9.99"));
        assert_eq!(Price::parse("0").unwrap().amount(), Decimal::ZERO);
        assert_eq!(Price::parse(" 12.50 ").unwrap().amount(), dec("12.50"));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Price::parse(""), Err(PriceError::Empty));
        assert_eq!(Price::parse("   "), Err(PriceError::Empty));
    }

    #[test]
    fn test_parse_not_a_number() {
        assert_eq!(Price::parse("free"), Err(PriceError::NotANumber));
        assert_eq!(Price::parse("9.99abc"), Err(PriceError::NotANumber));
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(Price::parse("-1"), Err(PriceError::Negative));
        assert_eq!(Price::parse("-0.01"), Err(PriceError::Negative));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(Price::parse("-0").unwrap(), Price::ZERO);
    }

    #[test]
    fn test_from_decimal_negative() {
        assert_eq!(Price::from_decimal(dec("-5")), Err(PriceError::Negative));
    }
}
