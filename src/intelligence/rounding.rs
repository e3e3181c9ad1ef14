// ABOUTME: Decimal rounding helpers with fixed-point formatting semantics
// ABOUTME: Exact-value rounding, ties away from zero, and whole-number rounding toward +infinity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Rounding helpers
//!
//! Published numbers are rounded the way fixed-point formatting rounds: the
//! exact binary value of the input is compared against the two neighbouring
//! decimals, so `1.005` (stored as `1.00499…`) rounds down to `1.0` while the
//! exactly representable `3417.625` rounds up to `3417.63`.

/// Inputs at or above this magnitude are returned unchanged
const FIXED_POINT_LIMIT: f64 = 1e21;

/// Round to `places` decimal digits using the exact binary value of `value`
///
/// Exact ties round away from zero. Non-finite values and magnitudes of
/// `1e21` or more are returned unchanged; negative zero becomes zero.
#[must_use]
pub fn round_decimal(value: f64, places: u8) -> f64 {
    if !value.is_finite() || value.abs() >= FIXED_POINT_LIMIT {
        return value;
    }

    let magnitude = value.abs();
    let rounded = if is_exact_tie(magnitude, places) {
        let scale = 10_f64.powi(i32::from(places));
        (magnitude * scale).ceil() / scale
    } else {
        format!("{magnitude:.prec$}", prec = usize::from(places))
            .parse()
            .unwrap_or(magnitude)
    };

    if rounded == 0.0 {
        0.0
    } else {
        rounded.copysign(value)
    }
}

/// Round to the nearest whole number; exact halves round toward +infinity
///
/// Returns `None` for `NaN` and infinities. The result stays an `f64` so
/// magnitudes beyond the integer range are kept instead of saturating.
#[must_use]
pub fn round_whole(value: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    let mut rounded = value.round();
    if value < 0.0 && value - value.trunc() == -0.5 {
        rounded += 1.0;
    }
    Some(if rounded == 0.0 { 0.0 } else { rounded })
}

/// Whether `magnitude` lies exactly halfway between two `places`-digit decimals
///
/// A decimal tie `(10k + 5) / 10^(places + 1)` is representable in binary only
/// when it equals an odd multiple of `2^-(places + 1)`. Scaling by a power of
/// two is exact, so the check needs no rounding.
fn is_exact_tie(magnitude: f64, places: u8) -> bool {
    let scaled = magnitude * 2_f64.powi(i32::from(places) + 1);
    scaled.fract() == 0.0 && scaled % 2.0 == 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_exact_binary_value() {
        assert_eq!(round_decimal(1.005, 2), 1.0);
        assert_eq!(round_decimal(1.45, 1), 1.4);
        assert_eq!(round_decimal(373.3125, 1), 373.3);
        assert_eq!(round_decimal(76.638_888_888, 1), 76.6);
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(round_decimal(0.25, 1), 0.3);
        assert_eq!(round_decimal(2.5, 0), 3.0);
        assert_eq!(round_decimal(0.125, 2), 0.13);
        assert_eq!(round_decimal(3417.625, 2), 3417.63);
        assert_eq!(round_decimal(-0.25, 1), -0.3);
    }

    #[test]
    fn test_passthrough_and_negative_zero() {
        assert!(round_decimal(f64::NAN, 2).is_nan());
        assert_eq!(round_decimal(f64::INFINITY, 1), f64::INFINITY);
        assert_eq!(round_decimal(2e21, 2), 2e21);

        let zero = round_decimal(-0.001, 2);
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_positive());
    }

    #[test]
    fn test_round_whole() {
        assert_eq!(round_whole(2501.7), Some(2502.0));
        assert_eq!(round_whole(1349.5), Some(1350.0));
        assert_eq!(round_whole(-2.5), Some(-2.0));
        assert_eq!(round_whole(-2.6), Some(-3.0));
        assert_eq!(round_whole(1.55e20), Some(1.55e20));
        assert_eq!(round_whole(f64::NAN), None);
        assert_eq!(round_whole(f64::NEG_INFINITY), None);
    }
}
