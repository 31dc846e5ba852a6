//! Fixed-point number formatting for chart labels.

use rust_decimal::prelude::*;

/// Format `value` with exactly `digits` decimals, rounding halfway cases
/// away from zero on the exact decimal value of the `f64`.
///
/// `{:.N}` rounds exact ties to even (`0.25` -> `"0.2"`); chart labels
/// round them up (`"0.3"`). Non-finite values fall back to `{:.N}`.
pub fn to_fixed(value: f64, digits: u32) -> String {
    match Decimal::from_f64_retain(value.abs()) {
        Some(magnitude) => {
            let mut rounded =
                magnitude.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(digits);
            let sign = if value < 0.0 { "-" } else { "" };
            format!("{}{}", sign, rounded)
        }
        None => format!("{:.*}", digits as usize, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(-0.25, 1), "-0.3");
        assert_eq!(to_fixed(8.0625, 3), "8.063");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_non_ties_use_exact_binary_value() {
        // 1.005 is stored just below the tie.
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(8.66 + 1.234, 3), "9.894");
    }

    #[test]
    fn test_pads_and_keeps_sign() {
        assert_eq!(to_fixed(8.66, 3), "8.660");
        assert_eq!(to_fixed(0.0, 1), "0.0");
        assert_eq!(to_fixed(-6.976, 1), "-7.0");
        assert_eq!(to_fixed(-0.04, 1), "-0.0");
    }
}
