//! Amount units and conversion into the base unit.
//!
//! The chain only ever sees integer amounts of its smallest denomination,
//! the *boson*. Humans prefer "1.5 standard". This module is the single
//! place where one becomes the other, and it does so without floating point:
//! decimal strings are parsed digit by digit and scaled with checked integer
//! arithmetic, so `0.1 standard` is exactly `10_000_000` bosons and never
//! `9_999_999`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Unit
// ---------------------------------------------------------------------------

/// A display unit with a fixed number of decimal places relative to the boson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// The base unit itself. 1 boson = 1 boson.
    Boson,
    /// 1 milli = 10^5 bosons.
    Milli,
    /// The standard display unit. 1 standard = 10^8 bosons.
    Standard,
}

impl Unit {
    /// Number of decimal places between this unit and the boson.
    pub fn decimals(&self) -> u32 {
        match self {
            Self::Boson => 0,
            Self::Milli => 5,
            Self::Standard => 8,
        }
    }

    /// How many bosons make one of this unit.
    pub fn scale(&self) -> u64 {
        10u64.pow(self.decimals())
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boson => "boson",
            Self::Milli => "milli",
            Self::Standard => "standard",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "boson" => Ok(Self::Boson),
            "milli" => Ok(Self::Milli),
            "standard" => Ok(Self::Standard),
            other => Err(AmountError::UnknownUnit(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// DisplayAmount
// ---------------------------------------------------------------------------

/// A caller-facing amount, before conversion.
///
/// Either a whole number or a decimal string. Floats are accepted through
/// `From<f64>` and stored as their shortest round-tripping decimal text,
/// which is what a user typing the number would have meant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayAmount {
    /// A whole number of display units.
    Integer(u64),
    /// A decimal number of display units, e.g. `"12.5"`.
    Decimal(String),
}

impl From<u64> for DisplayAmount {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for DisplayAmount {
    fn from(value: u32) -> Self {
        Self::Integer(u64::from(value))
    }
}

impl From<&str> for DisplayAmount {
    fn from(value: &str) -> Self {
        Self::Decimal(value.to_string())
    }
}

impl From<String> for DisplayAmount {
    fn from(value: String) -> Self {
        Self::Decimal(value)
    }
}

impl From<f64> for DisplayAmount {
    fn from(value: f64) -> Self {
        // NaN and infinities format as "NaN"/"inf" and fail parsing later.
        Self::Decimal(value.to_string())
    }
}

impl fmt::Display for DisplayAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Decimal(s) => f.write_str(s),
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons an amount cannot be expressed in bosons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is missing")]
    Missing,

    #[error("amount is not a number: {0:?}")]
    NotNumeric(String),

    #[error("amount must not be negative: {0}")]
    Negative(String),

    #[error("amount {amount} has more than {decimals} decimal places for unit {unit}")]
    TooPrecise {
        amount: String,
        unit: Unit,
        decimals: u32,
    },

    #[error("amount {0} overflows the base unit range")]
    Overflow(String),

    #[error("unknown unit: {0:?}")]
    UnknownUnit(String),
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Converts a display amount into bosons.
///
/// `None` is rejected with [`AmountError::Missing`]; the caller never has to
/// remember a separate "is it set?" check.
///
/// ```
/// use gallactic_sdk::units::{to_base_unit, Unit};
///
/// assert_eq!(to_base_unit(Some(100u64.into()), Unit::Standard).unwrap(), 10_000_000_000);
/// assert_eq!(to_base_unit(Some("0.5".into()), Unit::Standard).unwrap(), 50_000_000);
/// assert!(to_base_unit(None, Unit::Standard).is_err());
/// ```
pub fn to_base_unit(amount: Option<DisplayAmount>, unit: Unit) -> Result<u64, AmountError> {
    match amount.ok_or(AmountError::Missing)? {
        DisplayAmount::Integer(whole) => whole
            .checked_mul(unit.scale())
            .ok_or_else(|| AmountError::Overflow(whole.to_string())),
        DisplayAmount::Decimal(text) => parse_decimal(&text, unit),
    }
}

/// Renders a boson amount in the given unit, trimming trailing zeros.
///
/// The inverse of [`to_base_unit`]: feeding the output back through it
/// always yields the original boson value.
pub fn from_base_unit(value: u64, unit: Unit) -> String {
    let scale = unit.scale();
    let whole = value / scale;
    let frac = value % scale;
    if frac == 0 {
        return whole.to_string();
    }
    let digits = format!("{:0>width$}", frac, width = unit.decimals() as usize);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

fn parse_decimal(text: &str, unit: Unit) -> Result<u64, AmountError> {
    let trimmed = text.trim();
    if trimmed.starts_with('-') {
        return Err(AmountError::Negative(trimmed.to_string()));
    }

    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (trimmed, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty()) || !all_digits(int_part) || !all_digits(frac_part)
    {
        return Err(AmountError::NotNumeric(text.to_string()));
    }

    let decimals = unit.decimals() as usize;
    let significant_frac = frac_part.trim_end_matches('0');
    if significant_frac.len() > decimals {
        return Err(AmountError::TooPrecise {
            amount: trimmed.to_string(),
            unit,
            decimals: unit.decimals(),
        });
    }

    let overflow = || AmountError::Overflow(trimmed.to_string());

    let whole: u64 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().map_err(|_| overflow())?
    };

    let frac: u64 = if significant_frac.is_empty() {
        0
    } else {
        let padded = format!("{:0<width$}", significant_frac, width = decimals);
        padded.parse().map_err(|_| overflow())?
    };

    whole
        .checked_mul(unit.scale())
        .and_then(|w| w.checked_add(frac))
        .ok_or_else(overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(amount: impl Into<DisplayAmount>, unit: Unit) -> Result<u64, AmountError> {
        to_base_unit(Some(amount.into()), unit)
    }

    #[test]
    fn standard_is_ten_to_the_eighth() {
        assert_eq!(convert(100u64, Unit::Standard).unwrap(), 10_000_000_000);
        assert_eq!(convert(1u64, Unit::Standard).unwrap(), 100_000_000);
    }

    #[test]
    fn boson_is_identity() {
        assert_eq!(convert(12_345u64, Unit::Boson).unwrap(), 12_345);
        assert_eq!(convert("12345", Unit::Boson).unwrap(), 12_345);
    }

    #[test]
    fn decimal_strings_convert_exactly() {
        assert_eq!(convert("0.1", Unit::Standard).unwrap(), 10_000_000);
        assert_eq!(convert("1.5", Unit::Standard).unwrap(), 150_000_000);
        assert_eq!(convert(".25", Unit::Standard).unwrap(), 25_000_000);
        assert_eq!(convert("3.", Unit::Milli).unwrap(), 300_000);
        assert_eq!(convert("  7.00000001 ", Unit::Standard).unwrap(), 700_000_001);
    }

    #[test]
    fn floats_go_through_their_decimal_text() {
        assert_eq!(convert(0.1f64, Unit::Standard).unwrap(), 10_000_000);
        assert_eq!(convert(2.5f64, Unit::Milli).unwrap(), 250_000);
    }

    #[test]
    fn trailing_zeros_beyond_precision_are_fine() {
        assert_eq!(convert("1.000000000000", Unit::Standard).unwrap(), 100_000_000);
    }

    #[test]
    fn missing_amount_rejected() {
        assert_eq!(to_base_unit(None, Unit::Standard), Err(AmountError::Missing));
    }

    #[test]
    fn non_numeric_rejected() {
        for bad in ["", ".", "abc", "1.2.3", "1e5", "12a", "NaN"] {
            assert!(
                matches!(convert(bad, Unit::Standard), Err(AmountError::NotNumeric(_))),
                "{bad:?} should be rejected"
            );
        }
        assert!(matches!(
            convert(f64::INFINITY, Unit::Standard),
            Err(AmountError::NotNumeric(_))
        ));
    }

    #[test]
    fn negative_rejected() {
        assert!(matches!(convert("-1", Unit::Standard), Err(AmountError::Negative(_))));
        assert!(matches!(convert(-0.5f64, Unit::Boson), Err(AmountError::Negative(_))));
    }

    #[test]
    fn excess_precision_rejected() {
        assert!(matches!(
            convert("0.5", Unit::Boson),
            Err(AmountError::TooPrecise { decimals: 0, .. })
        ));
        assert!(matches!(
            convert("0.000000001", Unit::Standard),
            Err(AmountError::TooPrecise { .. })
        ));
    }

    #[test]
    fn overflow_rejected() {
        assert!(matches!(convert(u64::MAX, Unit::Standard), Err(AmountError::Overflow(_))));
        assert!(matches!(
            convert("99999999999999999999999", Unit::Boson),
            Err(AmountError::Overflow(_))
        ));
    }

    #[test]
    fn from_base_unit_trims_zeros() {
        assert_eq!(from_base_unit(150_000_000, Unit::Standard), "1.5");
        assert_eq!(from_base_unit(100_000_000, Unit::Standard), "1");
        assert_eq!(from_base_unit(1, Unit::Standard), "0.00000001");
        assert_eq!(from_base_unit(42, Unit::Boson), "42");
    }

    #[test]
    fn display_then_convert_recovers_base_value() {
        for unit in [Unit::Boson, Unit::Milli, Unit::Standard] {
            for value in [0u64, 1, 99_999, 100_000, 123_456_789, 10_000_000_000, u64::MAX] {
                let shown = from_base_unit(value, unit);
                assert_eq!(convert(shown.as_str(), unit).unwrap(), value, "{unit} {value}");
            }
        }
    }

    #[test]
    fn unit_parses_and_displays() {
        assert_eq!("standard".parse::<Unit>().unwrap(), Unit::Standard);
        assert_eq!("Boson".parse::<Unit>().unwrap(), Unit::Boson);
        assert_eq!(Unit::Milli.to_string(), "milli");
        assert!(matches!("gwei".parse::<Unit>(), Err(AmountError::UnknownUnit(_))));
    }
}
