//! Fixed-point storage for ruler values.
//!
//! Ruler values are kept as integer multiples of `10^-decimals`. A ruler with
//! a 0.1 unit stores 50.0 as `500`, so stepping, flooring and rounding onto the
//! grid never accumulates float error.

use crate::{Result, RulerError};

/// Largest number of fractional digits a ruler value may carry.
pub const MAX_DECIMALS: u32 = 6;

/// Raw values beyond this magnitude are rejected so `i64` grid math can't overflow.
const MAX_RAW: f64 = (1u64 << 52) as f64;

/// Number of fractional digits used to encode values as `i64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct DecimalScale {
    decimals: u32,
}

impl DecimalScale {
    /// Whole numbers only (money amounts, seconds).
    pub const INTEGER: Self = Self { decimals: 0 };

    pub fn new(decimals: u32) -> Self {
        Self {
            decimals: decimals.min(MAX_DECIMALS),
        }
    }

    /// Smallest scale that encodes every given value exactly, capped at
    /// [`MAX_DECIMALS`].
    pub fn fitting(values: &[f64]) -> Self {
        let decimals = values
            .iter()
            .map(|value| fractional_digits(*value))
            .max()
            .unwrap_or(0);
        Self::new(decimals)
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// `10^decimals`
    pub fn factor(&self) -> i64 {
        10i64.pow(self.decimals)
    }

    /// Encodes `value`, rounding to the nearest representable raw value.
    pub fn to_raw(&self, value: f64) -> Result<i64> {
        if !value.is_finite() {
            return Err(RulerError::NonFinite("value"));
        }
        let scaled = (value * self.factor() as f64).round();
        if scaled.abs() > MAX_RAW {
            return Err(RulerError::ValueOutOfRange {
                value,
                min: -MAX_RAW / self.factor() as f64,
                max: MAX_RAW / self.factor() as f64,
            });
        }
        Ok(scaled as i64)
    }

    /// Decodes a raw value. Integer division by a power of ten is correctly
    /// rounded, so `to_value(to_raw(0.3)) == 0.3`.
    pub fn to_value(&self, raw: i64) -> f64 {
        raw as f64 / self.factor() as f64
    }

    /// Formats a raw value without trailing zeros: `500 -> "50"`, `505 -> "50.5"`.
    pub fn format(&self, raw: i64) -> String {
        let factor = self.factor().unsigned_abs();
        let sign = if raw < 0 { "-" } else { "" };
        let magnitude = raw.unsigned_abs();
        let whole = magnitude / factor;
        let fraction = magnitude % factor;
        if fraction == 0 {
            return format!("{sign}{whole}");
        }
        let digits = format!("{fraction:0width$}", width = self.decimals as usize);
        format!("{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}

fn fractional_digits(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    (0..=MAX_DECIMALS)
        .find(|&digits| {
            let scaled = value * 10f64.powi(digits as i32);
            (scaled - scaled.round()).abs() <= 1e-9 * scaled.abs().max(1.0)
        })
        .unwrap_or(MAX_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitting_picks_the_finest_value() {
        assert_eq!(DecimalScale::fitting(&[0.0, 100.0, 50.0, 0.1]).decimals(), 1);
        assert_eq!(DecimalScale::fitting(&[1.25, 3.0]).decimals(), 2);
        assert_eq!(DecimalScale::fitting(&[15_000.0, 100.0]), DecimalScale::INTEGER);
        assert_eq!(DecimalScale::fitting(&[]), DecimalScale::INTEGER);
    }

    #[test]
    fn fitting_caps_repeating_fractions() {
        assert_eq!(DecimalScale::fitting(&[1.0 / 3.0]).decimals(), MAX_DECIMALS);
    }

    #[test]
    fn raw_round_trip_is_exact_for_tenths() {
        let scale = DecimalScale::new(1);
        assert_eq!(scale.to_raw(49.9).unwrap(), 499);
        assert_eq!(scale.to_value(499), 49.9);
        assert_eq!(scale.to_value(3), 0.3);
        assert_eq!(scale.to_value(400), 40.0);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let scale = DecimalScale::new(1);
        assert_eq!(scale.to_raw(f64::NAN), Err(RulerError::NonFinite("value")));
        assert!(scale.to_raw(f64::INFINITY).is_err());
        assert!(scale.to_raw(1e300).is_err());
    }

    #[test]
    fn format_trims_trailing_zeros() {
        let scale = DecimalScale::new(2);
        assert_eq!(scale.format(5000), "50");
        assert_eq!(scale.format(5050), "50.5");
        assert_eq!(scale.format(5005), "50.05");
        assert_eq!(scale.format(-5), "-0.05");
        assert_eq!(DecimalScale::INTEGER.format(15_000), "15000");
    }
}
