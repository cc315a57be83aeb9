//! Progressive income tax withholding.
//!
//! Income is partitioned across an ascending bracket table and each slice is
//! taxed at its bracket's marginal rate.
//!
//! ## Default Table
//!
//! | Income           | Rate |
//! |------------------|------|
//! | 0 – 15 000       | 0%   |
//! | 15 000 – 30 000  | 8%   |
//! | above 30 000     | 15%  |

use rust_decimal::Decimal;

use crate::models::TaxBracket;

use super::round_to_cents;

/// The national income tax table.
pub const SURINAME_TAX_BRACKETS: [TaxBracket; 3] = [
    TaxBracket::new(
        Decimal::ZERO,
        Some(Decimal::from_parts(15000, 0, 0, false, 0)),
        Decimal::ZERO,
    ),
    TaxBracket::new(
        Decimal::from_parts(15000, 0, 0, false, 0),
        Some(Decimal::from_parts(30000, 0, 0, false, 0)),
        Decimal::from_parts(8, 0, 0, false, 2),
    ),
    TaxBracket::new(
        Decimal::from_parts(30000, 0, 0, false, 0),
        None,
        Decimal::from_parts(15, 0, 0, false, 2),
    ),
];

/// Calculates progressive tax on `income` using the supplied bracket table.
///
/// Every bracket taxes only the slice of income above its `min` and up to its
/// `max`; the unbounded last bracket taxes everything above its `min`. An
/// income exactly on a boundary falls entirely in the lower bracket.
///
/// The table must be ascending and contiguous. It is neither sorted nor
/// checked here.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_tax_withholding, SURINAME_TAX_BRACKETS};
/// use rust_decimal::Decimal;
///
/// // 0 + 1200 + 1500
/// let tax = calculate_tax_withholding(Decimal::from(40000), &SURINAME_TAX_BRACKETS);
/// assert_eq!(tax, Decimal::from(2700));
/// ```
pub fn calculate_tax_withholding(income: Decimal, brackets: &[TaxBracket]) -> Decimal {
    let tax: Decimal = brackets
        .iter()
        .map(|bracket| bracket.taxable_slice(income) * bracket.rate)
        .sum();

    round_to_cents(tax)
}

/// Checked form of [`calculate_tax_withholding`]; `None` on overflow.
pub(crate) fn try_tax_withholding(income: Decimal, brackets: &[TaxBracket]) -> Option<Decimal> {
    brackets
        .iter()
        .try_fold(Decimal::ZERO, |tax, bracket| {
            tax.checked_add(bracket.taxable_slice(income).checked_mul(bracket.rate)?)
        })
        .map(round_to_cents)
}
