//! Hourly pay calculation functionality.
//!
//! Regular hours are paid at the hourly rate and overtime hours at the
//! rate times an overtime multiplier (time-and-a-half unless overridden).

use rust_decimal::Decimal;

use super::round_to_cents;

/// Default overtime multiplier: time-and-a-half.
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Calculates hourly pay with the default 1.5x overtime multiplier.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_hourly_pay;
/// use rust_decimal::Decimal;
///
/// // 800 regular + 300 overtime
/// let pay = calculate_hourly_pay(Decimal::from(20), Decimal::from(40), Decimal::from(10));
/// assert_eq!(pay, Decimal::from(1100));
/// ```
pub fn calculate_hourly_pay(
    hourly_rate: Decimal,
    regular_hours: Decimal,
    overtime_hours: Decimal,
) -> Decimal {
    calculate_hourly_pay_with_multiplier(
        hourly_rate,
        regular_hours,
        overtime_hours,
        DEFAULT_OVERTIME_MULTIPLIER,
    )
}

/// Calculates hourly pay with an explicit overtime multiplier.
///
/// Computes `regular_hours * hourly_rate + overtime_hours * hourly_rate * overtime_multiplier`,
/// rounded to cents once at the end. Inputs are not validated here.
///
/// # Panics
///
/// Panics if the products overflow the `Decimal` range. The payslip path
/// uses checked arithmetic instead.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_hourly_pay_with_multiplier;
/// use rust_decimal::Decimal;
///
/// // Double time: 800 regular + 400 overtime
/// let pay = calculate_hourly_pay_with_multiplier(
///     Decimal::from(20),
///     Decimal::from(40),
///     Decimal::from(10),
///     Decimal::from(2),
/// );
/// assert_eq!(pay, Decimal::from(1200));
/// ```
pub fn calculate_hourly_pay_with_multiplier(
    hourly_rate: Decimal,
    regular_hours: Decimal,
    overtime_hours: Decimal,
    overtime_multiplier: Decimal,
) -> Decimal {
    let regular_pay = regular_hours * hourly_rate;
    let overtime_pay = overtime_hours * hourly_rate * overtime_multiplier;

    round_to_cents(regular_pay + overtime_pay)
}

/// Checked form of [`calculate_hourly_pay_with_multiplier`]; `None` on overflow.
pub(crate) fn try_hourly_pay(
    hourly_rate: Decimal,
    regular_hours: Decimal,
    overtime_hours: Decimal,
    overtime_multiplier: Decimal,
) -> Option<Decimal> {
    let regular_pay = regular_hours.checked_mul(hourly_rate)?;
    let overtime_pay = overtime_hours
        .checked_mul(hourly_rate)?
        .checked_mul(overtime_multiplier)?;

    regular_pay.checked_add(overtime_pay).map(round_to_cents)
}
