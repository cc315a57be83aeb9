//! Net pay aggregation.

use rust_decimal::Decimal;

use super::round_to_cents;

/// Calculates net pay: gross pay minus tax minus every deduction.
///
/// The result is rounded once, after all subtractions, and clamped so it is
/// never negative. A shortfall is reported as exactly zero.
///
/// # Panics
///
/// Panics if the deductions sum past the `Decimal` range.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_net_pay;
/// use rust_decimal::Decimal;
///
/// let net = calculate_net_pay(Decimal::from(1000), Decimal::from(800), &[Decimal::from(300)]);
/// assert_eq!(net, Decimal::ZERO);
/// ```
pub fn calculate_net_pay(gross_pay: Decimal, tax_amount: Decimal, deductions: &[Decimal]) -> Decimal {
    let deductions_total: Decimal = deductions.iter().copied().sum();
    let net = round_to_cents(gross_pay - tax_amount - deductions_total);

    net.max(Decimal::ZERO)
}

/// Rounded net pay before clamping; `None` on overflow.
///
/// A negative result is the shortfall the clamp in [`calculate_net_pay`] hides.
pub(crate) fn try_unclamped_net_pay(
    gross_pay: Decimal,
    tax_amount: Decimal,
    deductions: &[Decimal],
) -> Option<Decimal> {
    let deductions_total = deductions
        .iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(*amount))?;

    gross_pay
        .checked_sub(tax_amount)?
        .checked_sub(deductions_total)
        .map(round_to_cents)
}
