//! Currency rounding shared by every calculation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to exactly two decimal places, half away from zero.
///
/// Values at exactly half a cent round up in magnitude.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_cents(Decimal::from_str("757.2925").unwrap()), Decimal::from_str("757.29").unwrap());
/// assert_eq!(round_to_cents(Decimal::from_str("123.455").unwrap()), Decimal::from_str("123.46").unwrap());
/// ```
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
