//! Fixed-point price utilities.
//!
//! ## Overview
//!
//! Prices are stored as `i64` scaled by 10^8 so that tree comparisons never
//! touch floating point. Prices are signed: the book stores whatever key it is
//! given, negative values included.
//!
//! ## Scale Factor
//!
//! 10^8 (100,000,000) gives 8 decimal places. Inputs with more places are
//! rounded to 8.
//!
//! ## Examples
//!
//! ```
//! use price_tree::types::price::{to_fixed, from_fixed, Price};
//!
//! let raw = to_fixed("101.5").unwrap();
//! assert_eq!(raw, 10_150_000_000);
//! assert_eq!(from_fixed(raw), "101.50000000");
//!
//! let price: Price = "101.5".parse().unwrap();
//! assert_eq!(price.to_string(), "101.5");
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PriceError;

/// Scaling factor for fixed-point arithmetic: 10^8
pub const SCALE: i64 = 100_000_000;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a decimal string to fixed-point i64
///
/// Returns `None` if parsing fails or the value does not fit.
///
/// ```
/// use price_tree::types::price::to_fixed;
///
/// assert_eq!(to_fixed("1.0"), Some(100_000_000));
/// assert_eq!(to_fixed("-0.5"), Some(-50_000_000));
/// assert_eq!(to_fixed("0.00000001"), Some(1));
/// ```
pub fn to_fixed(s: &str) -> Option<i64> {
    let decimal = Decimal::from_str(s.trim()).ok()?;
    decimal_to_fixed(decimal)
}

/// Convert a Decimal to fixed-point i64, rounding to 8 decimal places
pub fn decimal_to_fixed(d: Decimal) -> Option<i64> {
    let scaled = d.checked_mul(Decimal::from(SCALE))?;
    scaled.round_dp(0).to_i64()
}

/// Convert fixed-point i64 to a Decimal
pub fn fixed_to_decimal(value: i64) -> Decimal {
    Decimal::from(value) / Decimal::from(SCALE)
}

/// Convert fixed-point i64 to a string with 8 decimal places
///
/// ```
/// use price_tree::types::price::from_fixed;
///
/// assert_eq!(from_fixed(100_000_000), "1.00000000");
/// assert_eq!(from_fixed(-1), "-0.00000001");
/// ```
pub fn from_fixed(value: i64) -> String {
    format!("{:.8}", fixed_to_decimal(value))
}

/// Convert fixed-point i64 to a string with trailing zeros trimmed
///
/// ```
/// use price_tree::types::price::from_fixed_trimmed;
///
/// assert_eq!(from_fixed_trimmed(100_000_000), "1");
/// assert_eq!(from_fixed_trimmed(150_000_000), "1.5");
/// ```
pub fn from_fixed_trimmed(value: i64) -> String {
    fixed_to_decimal(value).normalize().to_string()
}

// ============================================================================
// Price
// ============================================================================

/// A price key in fixed-point representation (scaled by 10^8).
///
/// ## Range and Precision
///
/// The scaled value is an `i64`, so magnitudes above `i64::MAX / SCALE`
/// (about 9.2e10) are rejected with [`PriceError::OutOfRange`]. Digits past
/// the 8th decimal place are rounded half-to-even, so `0.000000001` becomes 0.
///
/// Ordering is plain integer ordering on the scaled value, so two prices that
/// print the same always compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

impl Price {
    /// Zero price
    pub const ZERO: Price = Price(0);

    /// Wrap an already-scaled value
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Price(raw)
    }

    /// Scaled integer value
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Price as an exact Decimal
    pub fn to_decimal(self) -> Decimal {
        fixed_to_decimal(self.0)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        decimal_to_fixed(value)
            .map(Price)
            .ok_or_else(|| PriceError::OutOfRange(value.to_string()))
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())
            .map_err(|e| PriceError::Parse {
                input: s.to_string(),
                reason: e.to_string(),
            })?;
        Price::try_from(decimal)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&from_fixed_trimmed(self.0))
    }
}

// Written as a decimal string; read from a string or a JSON number.
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&self.to_decimal().normalize(), serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let decimal = <Decimal as Deserialize>::deserialize(deserializer)?;
        Price::try_from(decimal).map_err(D::Error::custom)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_constant() {
        assert_eq!(SCALE, 100_000_000);
    }

    #[test]
    fn test_to_fixed_basic() {
        assert_eq!(to_fixed("1.0"), Some(100_000_000));
        assert_eq!(to_fixed("1"), Some(100_000_000));
        assert_eq!(to_fixed("0.5"), Some(50_000_000));
        assert_eq!(to_fixed("101.5"), Some(10_150_000_000));
        assert_eq!(to_fixed(" 99 "), Some(9_900_000_000));
    }

    #[test]
    fn test_to_fixed_signed() {
        assert_eq!(to_fixed("-1.0"), Some(-100_000_000));
        assert_eq!(to_fixed("-0.00000001"), Some(-1));
        assert_eq!(to_fixed("0"), Some(0));
    }

    #[test]
    fn test_to_fixed_invalid() {
        assert_eq!(to_fixed("abc"), None);
        assert_eq!(to_fixed(""), None);
        assert_eq!(to_fixed("1000000000000"), None);
    }

    #[test]
    fn test_from_fixed() {
        assert_eq!(from_fixed(100_000_000), "1.00000000");
        assert_eq!(from_fixed(0), "0.00000000");
        assert_eq!(from_fixed(-150_000_000), "-1.50000000");
    }

    #[test]
    fn test_from_fixed_trimmed() {
        assert_eq!(from_fixed_trimmed(10_150_000_000), "101.5");
        assert_eq!(from_fixed_trimmed(123_456_789), "1.23456789");
        assert_eq!(from_fixed_trimmed(0), "0");
    }

    #[test]
    fn test_price_parse_and_display() {
        let price: Price = "101.50".parse().unwrap();
        assert_eq!(price.raw(), 10_150_000_000);
        assert_eq!(price.to_string(), "101.5");

        let negative: Price = "-3.25".parse().unwrap();
        assert_eq!(negative.to_string(), "-3.25");
        assert!(negative < Price::ZERO);
    }

    #[test]
    fn test_price_parse_errors() {
        assert!(matches!("x1".parse::<Price>(), Err(PriceError::Parse { .. })));
        assert!(matches!(
            "99999999999999".parse::<Price>(),
            Err(PriceError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_price_ordering_is_numeric() {
        let a: Price = "99.0".parse().unwrap();
        let b: Price = "101.5".parse().unwrap();
        let c: Price = "101.50000000".parse().unwrap();
        assert!(a < b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_price_serde_string() {
        let price: Price = "101.5".parse().unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"101.5\"");

        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }

    #[test]
    fn test_price_deserialize_number() {
        let price: Price = serde_json::from_str("99").unwrap();
        assert_eq!(price.raw(), 9_900_000_000);

        let price: Price = serde_json::from_str("101.5").unwrap();
        assert_eq!(price.raw(), 10_150_000_000);
    }

    #[test]
    fn test_price_range_limits() {
        let max_whole = i64::MAX / SCALE;
        assert!(max_whole.to_string().parse::<Price>().is_ok());
        assert!(matches!(
            "123456789012.5".parse::<Price>(),
            Err(PriceError::OutOfRange(_))
        ));
        assert!(serde_json::from_str::<Price>("\"123456789012.5\"").is_err());

        // sub-unit digits round to the 8th place
        assert_eq!("0.000000001".parse::<Price>().unwrap(), Price::ZERO);
        assert_eq!("0.000000006".parse::<Price>().unwrap().raw(), 1);
    }

    #[test]
    fn test_price_json_forms() {
        let price: Price = serde_json::from_str("0.1").unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "\"0.1\"");

        let price: Price = serde_json::from_str("1e3").unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "\"1000\"");
    }

    #[test]
    fn test_precision() {
        let value = "123456789.12345678";
        let price: Price = value.parse().unwrap();
        assert_eq!(from_fixed(price.raw()), value);
    }
}
