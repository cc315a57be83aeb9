//! Salary pay calculation functionality.
//!
//! Converts an annual salary into the gross amount for one pay period.

use rust_decimal::Decimal;

use crate::models::PayFrequency;

use super::round_to_cents;

/// Calculates the gross pay for one period of an annual salary.
///
/// The annual amount is divided by the number of pay periods per year for
/// `frequency` (52, 26, 24 or 12) and rounded to cents.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_salary_pay;
/// use payroll_engine::models::PayFrequency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pay = calculate_salary_pay(Decimal::from(60000), PayFrequency::BiWeekly);
/// assert_eq!(pay, Decimal::from_str("2307.69").unwrap());
/// ```
pub fn calculate_salary_pay(annual_amount: Decimal, frequency: PayFrequency) -> Decimal {
    round_to_cents(annual_amount / frequency.periods_per_year_decimal())
}
