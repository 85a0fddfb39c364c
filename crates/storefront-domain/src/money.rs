//! Money as a minor-unit integer with currency code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fraction digits assumed when the source representation omits them.
pub const DEFAULT_FRACTION_DIGITS: i32 = 2;

/// A monetary value in the smallest unit of its currency.
///
/// This is a plain structural record: no rounding and no currency-aware
/// conversion ever happens here. The backend is the system of record for
/// price arithmetic; this type only carries its numbers to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Amount in minor units (e.g. cents).
    pub cent_amount: i64,
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Number of fraction digits for the currency.
    pub fraction_digits: i32,
}

impl Money {
    /// Create a money value with the default two fraction digits.
    pub fn new(cent_amount: i64, currency_code: impl Into<String>) -> Self {
        Self {
            cent_amount,
            currency_code: currency_code.into(),
            fraction_digits: DEFAULT_FRACTION_DIGITS,
        }
    }

    /// Set explicit fraction digits.
    pub fn with_fraction_digits(mut self, fraction_digits: i32) -> Self {
        self.fraction_digits = fraction_digits;
        self
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.cent_amount, self.currency_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fraction_digits() {
        let money = Money::new(4999, "USD");
        assert_eq!(money.fraction_digits, 2);
    }

    #[test]
    fn test_explicit_fraction_digits() {
        let money = Money::new(100, "JPY").with_fraction_digits(0);
        assert_eq!(money.fraction_digits, 0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let money = Money::new(1250, "EUR");
        let json = serde_json::to_value(&money).unwrap();
        assert_eq!(json["centAmount"], 1250);
        assert_eq!(json["currencyCode"], "EUR");
        assert_eq!(json["fractionDigits"], 2);
    }
}
