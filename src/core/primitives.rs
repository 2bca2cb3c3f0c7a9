use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Rounds `value` half away from zero and pins the scale to `decimals`, so
/// `20.0` renders as `20.00`.
///
/// Rounding works on the exact binary value, so `1.005` (stored just below
/// the tie) rounds to `1.00` the way `Number.prototype.toFixed` does.
///
/// Returns `None` for non-finite input or values outside the decimal range.
#[must_use]
pub fn f64_to_fixed_decimal(value: f64, decimals: u32) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    let mut fixed = Decimal::from_f64_retain(value)?
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    fixed.rescale(decimals);
    Some(fixed)
}

#[cfg(test)]
mod tests {
    use super::f64_to_fixed_decimal;

    #[test]
    fn fixed_decimal_pads_whole_numbers_to_scale() {
        let value = f64_to_fixed_decimal(20.0, 2).expect("finite value");
        assert_eq!(value.to_string(), "20.00");
    }

    #[test]
    fn fixed_decimal_rounds_half_away_from_zero() {
        let value = f64_to_fixed_decimal(0.125, 2).expect("finite value");
        assert_eq!(value.to_string(), "0.13");
        let negative = f64_to_fixed_decimal(-0.125, 2).expect("finite value");
        assert_eq!(negative.to_string(), "-0.13");
    }

    #[test]
    fn fixed_decimal_rounds_the_stored_binary_value() {
        let below_tie = f64_to_fixed_decimal(1.005, 2).expect("finite value");
        assert_eq!(below_tie.to_string(), "1.00");
        let also_below = f64_to_fixed_decimal(2.675, 2).expect("finite value");
        assert_eq!(also_below.to_string(), "2.67");
    }

    #[test]
    fn fixed_decimal_is_none_outside_decimal_range() {
        assert!(f64_to_fixed_decimal(1e30, 2).is_none());
    }

    #[test]
    fn fixed_decimal_rejects_non_finite() {
        assert!(f64_to_fixed_decimal(f64::NAN, 2).is_none());
        assert!(f64_to_fixed_decimal(f64::INFINITY, 2).is_none());
    }
}
