use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ArithmeticError, ValidationError};

/// Fractional digits of capacity carried by every [`Amount`].
pub const AMOUNT_DECIMALS: u32 = 12;

const SCALE: u128 = 10u128.pow(AMOUNT_DECIMALS);

/// Non-negative fixed-point decimal used for asset and share quantities.
///
/// Stored as an unsigned raw value scaled by `10^12`. All arithmetic is
/// checked: overflow and division by zero surface as [`ArithmeticError`]
/// instead of wrapping or panicking. Rounding is explicit — callers pick
/// [`round_dp`](Amount::round_dp) (half away from zero) or
/// [`floor_dp`](Amount::floor_dp); rendering never rounds on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Whole units, no fractional part.
    pub const fn from_int(units: u64) -> Self {
        Self(units as u128 * SCALE)
    }

    pub const fn raw(self) -> u128 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Parse a decimal string such as `"1.0543"`, `".5"`, or `"3"`.
    ///
    /// Negative values are rejected rather than clamped; amounts in this
    /// domain are quantities, not deltas.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyAmount);
        }
        if trimmed.starts_with('-') {
            return Err(ValidationError::AmountNegative {
                value: trimmed.to_owned(),
            });
        }

        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (unsigned, ""),
        };

        let not_a_number = int_part.is_empty() && frac_part.is_empty()
            || !int_part.bytes().all(|byte| byte.is_ascii_digit())
            || !frac_part.bytes().all(|byte| byte.is_ascii_digit());
        if not_a_number {
            return Err(ValidationError::AmountNotANumber {
                value: trimmed.to_owned(),
            });
        }

        if frac_part.len() as u32 > AMOUNT_DECIMALS {
            return Err(ValidationError::AmountPrecisionExceeded {
                value: trimmed.to_owned(),
                max: AMOUNT_DECIMALS,
            });
        }

        let out_of_range = || ValidationError::AmountOutOfRange {
            value: trimmed.to_owned(),
        };

        let int_units: u128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| out_of_range())?
        };
        let frac_units: u128 = if frac_part.is_empty() {
            0
        } else {
            let digits: u128 = frac_part.parse().map_err(|_| out_of_range())?;
            digits * 10u128.pow(AMOUNT_DECIMALS - frac_part.len() as u32)
        };

        int_units
            .checked_mul(SCALE)
            .and_then(|scaled| scaled.checked_add(frac_units))
            .map(Self)
            .ok_or_else(out_of_range)
    }

    pub fn checked_add(self, other: Self) -> Result<Self, ArithmeticError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(ArithmeticError::Overflow)
    }

    pub fn checked_sub(self, other: Self) -> Result<Self, ArithmeticError> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(ArithmeticError::Overflow)
    }

    /// Subtraction clamped at zero.
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// `self * factor`, rounded half-away-from-zero at `precision`
    /// fractional digits.
    pub fn mul_rounded(self, factor: Self, precision: u32) -> Result<Self, ArithmeticError> {
        let precision = precision.min(AMOUNT_DECIMALS);
        // The raw product carries 2 * AMOUNT_DECIMALS fractional digits.
        let product = self
            .0
            .checked_mul(factor.0)
            .ok_or(ArithmeticError::Overflow)?;
        let divisor = 10u128.pow(2 * AMOUNT_DECIMALS - precision);
        let step = 10u128.pow(AMOUNT_DECIMALS - precision);

        round_half_away(product, divisor)?
            .checked_mul(step)
            .map(Self)
            .ok_or(ArithmeticError::Overflow)
    }

    /// `self / divisor`, rounded half-away-from-zero at `precision`
    /// fractional digits. A zero divisor is an error, never infinity.
    pub fn div_rounded(self, divisor: Self, precision: u32) -> Result<Self, ArithmeticError> {
        if divisor.0 == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        let precision = precision.min(AMOUNT_DECIMALS);
        let numerator = self
            .0
            .checked_mul(10u128.pow(precision))
            .ok_or(ArithmeticError::Overflow)?;
        let step = 10u128.pow(AMOUNT_DECIMALS - precision);

        round_half_away(numerator, divisor.0)?
            .checked_mul(step)
            .map(Self)
            .ok_or(ArithmeticError::Overflow)
    }

    /// Round to `precision` fractional digits, half away from zero.
    pub fn round_dp(self, precision: u32) -> Self {
        if precision >= AMOUNT_DECIMALS {
            return self;
        }
        let step = 10u128.pow(AMOUNT_DECIMALS - precision);
        let remainder = self.0 % step;
        let floored = self.0 - remainder;
        if remainder >= step - remainder {
            // Truncate instead on the unreachable top-of-range edge.
            Self(floored.checked_add(step).unwrap_or(floored))
        } else {
            Self(floored)
        }
    }

    /// Round down to `precision` fractional digits.
    pub fn floor_dp(self, precision: u32) -> Self {
        if precision >= AMOUNT_DECIMALS {
            return self;
        }
        let step = 10u128.pow(AMOUNT_DECIMALS - precision);
        Self(self.0 - self.0 % step)
    }

    /// Render with exactly `precision` fractional digits (truncating; round
    /// first when rounding is wanted).
    pub fn format_dp(self, precision: u32) -> String {
        let precision = precision.min(AMOUNT_DECIMALS) as usize;
        let int_part = self.0 / SCALE;
        if precision == 0 {
            return int_part.to_string();
        }
        let digits = format!("{:012}", self.0 % SCALE);
        format!("{int_part}.{}", &digits[..precision])
    }
}

fn round_half_away(numerator: u128, denominator: u128) -> Result<u128, ArithmeticError> {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder >= denominator - remainder {
        quotient.checked_add(1).ok_or(ArithmeticError::Overflow)
    } else {
        Ok(quotient)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let int_part = self.0 / SCALE;
        let frac_part = self.0 % SCALE;
        if frac_part == 0 {
            return write!(f, "{int_part}");
        }
        let digits = format!("{frac_part:012}");
        write!(f, "{int_part}.{}", digits.trim_end_matches('0'))
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Amount {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Amount {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Amount> for String {
    fn from(value: Amount) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_scales_decimal_strings() {
        assert_eq!(Amount::parse("1.0543").expect("must parse").raw(), 1_054_300_000_000);
        assert_eq!(Amount::parse("0.001").expect("must parse").raw(), 1_000_000_000);
        assert_eq!(Amount::parse(" 3 ").expect("must parse").raw(), 3_000_000_000_000);
        assert_eq!(Amount::parse(".5").expect("must parse").raw(), 500_000_000_000);
        assert_eq!(Amount::parse("2.").expect("must parse").raw(), 2_000_000_000_000);
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(matches!(
            Amount::parse("abc"),
            Err(ValidationError::AmountNotANumber { .. })
        ));
        assert!(matches!(
            Amount::parse("1.2.3"),
            Err(ValidationError::AmountNotANumber { .. })
        ));
        assert!(matches!(
            Amount::parse("1e6"),
            Err(ValidationError::AmountNotANumber { .. })
        ));
        assert!(matches!(Amount::parse("   "), Err(ValidationError::EmptyAmount)));
    }

    #[test]
    fn rejects_negative_input() {
        assert!(matches!(
            Amount::parse("-0.5"),
            Err(ValidationError::AmountNegative { .. })
        ));
    }

    #[test]
    fn rejects_excess_precision() {
        let err = Amount::parse("0.0000000000001").expect_err("13 digits must fail");
        assert!(matches!(err, ValidationError::AmountPrecisionExceeded { max: 12, .. }));
    }

    #[test]
    fn rejects_out_of_range_input() {
        let err = Amount::parse("999999999999999999999999999999999999999").expect_err("must fail");
        assert!(matches!(err, ValidationError::AmountOutOfRange { .. }));
    }

    #[test]
    fn display_round_trips_and_trims_zeros() {
        let parsed = Amount::parse("1.0543").expect("must parse");
        assert_eq!(parsed.to_string(), "1.0543");
        assert_eq!(Amount::from_int(7).to_string(), "7");
        assert_eq!(Amount::parse("0.500").expect("must parse").to_string(), "0.5");
    }

    #[test]
    fn formats_with_fixed_precision() {
        let amount = Amount::parse("1.05").expect("must parse");
        assert_eq!(amount.format_dp(4), "1.0500");
        assert_eq!(Amount::ZERO.format_dp(4), "0.0000");
        assert_eq!(amount.format_dp(0), "1");
    }

    #[test]
    fn divides_with_half_away_rounding() {
        let one = Amount::from_int(1);
        let price = Amount::parse("1.0543").expect("must parse");
        // 1 / 1.0543 = 0.94849663..., sixth digit rounds up
        let shares = one.div_rounded(price, 6).expect("must divide");
        assert_eq!(shares, Amount::parse("0.948497").expect("must parse"));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let err = Amount::from_int(1)
            .div_rounded(Amount::ZERO, 6)
            .expect_err("must fail");
        assert_eq!(err, ArithmeticError::DivisionByZero);
    }

    #[test]
    fn multiplies_with_half_away_rounding() {
        let shares = Amount::parse("0.948497").expect("must parse");
        let price = Amount::parse("1.0543").expect("must parse");
        let value = shares.mul_rounded(price, 6).expect("must multiply");
        assert_eq!(value, Amount::from_int(1));
    }

    #[test]
    fn rounds_ties_away_from_zero() {
        let amount = Amount::parse("0.1234565").expect("must parse");
        assert_eq!(amount.round_dp(6), Amount::parse("0.123457").expect("must parse"));
        assert_eq!(amount.round_dp(3), Amount::parse("0.123").expect("must parse"));
    }

    #[test]
    fn floors_never_round_up() {
        let amount = Amount::parse("1.23456789").expect("must parse");
        assert_eq!(amount.floor_dp(4), Amount::parse("1.2345").expect("must parse"));
    }

    #[test]
    fn saturating_sub_clamps_at_zero() {
        let small = Amount::parse("0.5").expect("must parse");
        assert_eq!(small.saturating_sub(Amount::from_int(1)), Amount::ZERO);
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        let max = Amount::from_raw(u128::MAX);
        assert_eq!(
            max.checked_add(Amount::from_int(1)).expect_err("must fail"),
            ArithmeticError::Overflow
        );
        assert_eq!(
            max.mul_rounded(Amount::from_int(2), 6).expect_err("must fail"),
            ArithmeticError::Overflow
        );
    }

    #[test]
    fn serde_uses_decimal_strings() {
        let amount = Amount::parse("0.948497").expect("must parse");
        let encoded = serde_json::to_string(&amount).expect("must serialize");
        assert_eq!(encoded, "\"0.948497\"");
        let decoded: Amount = serde_json::from_str(&encoded).expect("must deserialize");
        assert_eq!(decoded, amount);
    }
}
