//! Type-safe price representation using decimal arithmetic.
//!
//! Menu prices arrive either as JSON numbers (`10.5`) or as numeric strings
//! (`"10.50"`). Both are accepted on input; on output a price is always a
//! JSON number so stored carts keep the `price: number` shape.
//!
//! A JSON number is read as an `f64`, so a price keeps at most
//! [`MAX_SIGNIFICANT_DIGITS`] significant digits. Within that bound the
//! shortest `f64` rendering reproduces the decimal digits exactly, which keeps
//! a stored price equal to the one that was saved.

use core::fmt;
use core::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("invalid price: {0}")]
    Invalid(String),
    /// The amount is below zero.
    #[error("price cannot be negative")]
    Negative,
    /// The amount has more significant digits than a JSON number holds.
    #[error("price {0} has more than {MAX_SIGNIFICANT_DIGITS} significant digits")]
    TooPrecise(Decimal),
}

/// Most significant digits a [`Price`] may carry.
pub const MAX_SIGNIFICANT_DIGITS: u32 = 15;

fn significant_digits(amount: Decimal) -> u32 {
    let mantissa = amount.normalize().mantissa().unsigned_abs();
    mantissa.checked_ilog10().map_or(1, |log| log + 1)
}

/// A non-negative unit price in the menu's currency.
///
/// ## Examples
///
/// ```
/// use deliveboo_core::Price;
///
/// assert!(Price::parse("12.50").is_ok());
/// assert!(Price::from_f64(3.0).is_ok());
///
/// assert!(Price::parse("").is_err());
/// assert!(Price::parse("abc").is_err());
/// assert!(Price::parse("-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero and
    /// [`PriceError::TooPrecise`] if it has more than
    /// [`MAX_SIGNIFICANT_DIGITS`] significant digits.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        if significant_digits(amount) > MAX_SIGNIFICANT_DIGITS {
            return Err(PriceError::TooPrecise(amount));
        }
        Ok(Self(amount))
    }

    /// Parse a price from its string form, e.g. `"10.50"`.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, not a decimal number,
    /// negative, or too precise.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }

        let amount = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| PriceError::Invalid(s.to_owned()))?;
        Self::new(amount)
    }

    /// Create a price from a floating point amount.
    ///
    /// The value is read through its shortest decimal rendering, so `0.1`
    /// becomes exactly `0.1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not finite, out of decimal range,
    /// negative, or too precise.
    pub fn from_f64(value: f64) -> Result<Self, PriceError> {
        let rendered = value.to_string();
        if !value.is_finite() {
            return Err(PriceError::Invalid(rendered));
        }
        let amount = Decimal::from_str(&rendered).map_err(|_| PriceError::Invalid(rendered))?;
        Self::new(amount)
    }

    /// Get the decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

/// Format an amount for display with exactly two decimals, e.g. `"24.00"`.
///
/// Midpoints round away from zero.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(self.0))
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract().is_zero() {
            if let Some(whole) = self.0.to_i64() {
                return serializer.serialize_i64(whole);
            }
        }
        // Correctly rounded, so the shortest rendering gives back our digits.
        match self.0.to_string().parse::<f64>() {
            Ok(value) => serializer.serialize_f64(value),
            Err(_) => serializer.serialize_str(&self.0.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative number or numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        Price::new(Decimal::from(v)).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        Price::new(Decimal::from(v)).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        Price::from_f64(v).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        Price::parse(v).map_err(E::custom)
    }
}
