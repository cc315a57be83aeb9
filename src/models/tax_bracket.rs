//! Marginal tax bracket model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal tax band.
///
/// Tables of brackets are ordered ascending by `min` with no gaps, and only
/// the last bracket is unbounded (`max == None`).
///
/// # Example
///
/// ```
/// use payroll_engine::models::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let bracket = TaxBracket::new(Decimal::new(15000, 0), Some(Decimal::new(30000, 0)), Decimal::new(8, 2));
/// assert_eq!(bracket.taxable_slice(Decimal::new(20000, 0)), Decimal::new(5000, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Lower bound of income in this bracket.
    pub min: Decimal,
    /// Upper bound of income in this bracket, `None` when unbounded.
    #[serde(default)]
    pub max: Option<Decimal>,
    /// Marginal rate applied to the slice of income in this bracket.
    pub rate: Decimal,
}

impl TaxBracket {
    /// Creates a bracket.
    pub const fn new(min: Decimal, max: Option<Decimal>, rate: Decimal) -> Self {
        Self { min, max, rate }
    }

    /// Returns true if this bracket has no upper limit.
    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }

    /// Returns the part of `income` that falls inside this bracket.
    ///
    /// Income at or below `min` contributes nothing, so a boundary value
    /// belongs to the lower bracket.
    pub fn taxable_slice(&self, income: Decimal) -> Decimal {
        if income <= self.min {
            return Decimal::ZERO;
        }

        let upper = match self.max {
            Some(max) if income > max => max,
            _ => income,
        };

        upper - self.min
    }
}
