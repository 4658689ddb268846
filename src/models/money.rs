//! Money type for representing currency amounts
//!
//! Amounts are plain `f64` values in whole currency units. Sub-unit precision
//! is not tracked; display rounding happens only when formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::engine::currency::CurrencyFormat;

/// A monetary amount in the user's currency
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Create a Money amount from a plain number
    ///
    /// # Examples
    /// ```
    /// use kwanza_cli::models::Money;
    /// let amount = Money::new(2500.0);
    /// assert_eq!(amount.value(), 2500.0);
    /// ```
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Clamp negative amounts to zero
    pub fn non_negative(&self) -> Self {
        Self(self.0.max(0.0))
    }

    /// Total ordering, used for stable sorts
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "1500", "1500.50", "-20", "1 500 Kz", "Kz 1500"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let cleaned: String = trimmed
            .trim_start_matches("Kz")
            .trim_end_matches("Kz")
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .collect();

        if cleaned.is_empty() {
            return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
        }

        let value: f64 = cleaned
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?;

        if !value.is_finite() {
            return Err(MoneyParseError::NotFinite(trimmed.to_string()));
        }

        Ok(Self(value))
    }

    /// Format with an explicit currency configuration
    pub fn format_with(&self, format: &CurrencyFormat) -> String {
        format.format(self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CurrencyFormat::default().format(self.0))
    }
}

impl From<f64> for Money {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f64> for Money {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Money {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    NotFinite(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::NotFinite(s) => write!(f, "Amount is not a finite number: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Money::new(1000.0);
        let b = Money::new(250.0);

        assert_eq!((a + b).value(), 1250.0);
        assert_eq!((a - b).value(), 750.0);
        assert_eq!((-a).value(), -1000.0);
        assert_eq!((a / 4.0).value(), 250.0);
    }

    #[test]
    fn test_display_rounds_to_whole_units() {
        assert_eq!(Money::new(250000.0).to_string(), "250 000 Kz");
        assert_eq!(Money::new(9090.91).to_string(), "9 091 Kz");
        assert_eq!(Money::new(-10000.0).to_string(), "-10 000 Kz");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("1500").unwrap().value(), 1500.0);
        assert_eq!(Money::parse("1500.5").unwrap().value(), 1500.5);
        assert_eq!(Money::parse("1 500 Kz").unwrap().value(), 1500.0);
        assert_eq!(Money::parse("-20").unwrap().value(), -20.0);
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
        assert!(matches!(
            Money::parse("inf"),
            Err(MoneyParseError::NotFinite(_))
        ));
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::new(1.0).is_positive());
        assert!(Money::new(-1.0).is_negative());
        assert_eq!(Money::new(-3.0).non_negative(), Money::zero());
    }

    #[test]
    fn test_sum() {
        let total: Money = vec![Money::new(100.0), Money::new(200.0), Money::new(300.0)]
            .into_iter()
            .sum();
        assert_eq!(total.value(), 600.0);
    }

    #[test]
    fn test_serialization_is_a_plain_number() {
        let m = Money::new(40000.0);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "40000.0");
        let back: Money = serde_json::from_str("40000").unwrap();
        assert_eq!(back, m);
    }
}
