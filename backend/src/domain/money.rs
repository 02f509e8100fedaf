//! Monetary rounding helpers.
//!
//! All money in the service is [`BigDecimal`]; binary floats never touch a
//! monetary value. Wire and storage representations both carry two decimal
//! places, produced by [`round_money`].

use bigdecimal::{BigDecimal, RoundingMode};

/// Number of decimal places carried by serialized monetary values.
const MONEY_SCALE: i64 = 2;

/// Round a monetary value to two decimal places, half-up.
///
/// Half-up matches the behaviour callers expect from currency arithmetic:
/// `1200.455` rounds to `1200.46`, `1200.454` to `1200.45`.
pub fn round_money(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(MONEY_SCALE, RoundingMode::HalfUp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn dec(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).expect("valid decimal literal")
    }

    #[rstest]
    #[case("1200.455", "1200.46")]
    #[case("1200.454", "1200.45")]
    #[case("0.005", "0.01")]
    #[case("2000", "2000.00")]
    #[case("0", "0.00")]
    #[case("19.999", "20.00")]
    fn rounds_half_up_to_two_places(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(round_money(&dec(input)), dec(expected));
    }

    #[test]
    fn rounding_is_idempotent() {
        let once = round_money(&dec("87.345"));
        assert_eq!(round_money(&once), once);
    }
}
