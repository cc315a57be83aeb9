//! Payroll input record and related types.
//!
//! This module defines the [`PayrollData`] record describing one worker's
//! compensation for a single calculation, and the [`CompensationType`] enum.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a worker's compensation amount is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompensationType {
    /// `compensation_amount` is an annual salary.
    Salary,
    /// `compensation_amount` is an hourly rate.
    Hourly,
}

/// The input record describing one worker's compensation for a pay period.
///
/// Built fresh by the caller for each calculation; the engine never
/// mutates it.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{CompensationType, PayrollData};
/// use rust_decimal::Decimal;
///
/// let data = PayrollData {
///     worker_id: "W001".to_string(),
///     compensation_type: CompensationType::Hourly,
///     compensation_amount: Decimal::new(25, 0),
///     regular_hours: Some(Decimal::new(40, 0)),
///     overtime_hours: None,
///     deductions: vec![],
/// };
/// assert!(data.is_hourly());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollData {
    /// Identifier of the worker being paid.
    pub worker_id: String,
    /// Whether the amount is an annual salary or an hourly rate.
    pub compensation_type: CompensationType,
    /// Annual salary or hourly rate, depending on `compensation_type`.
    pub compensation_amount: Decimal,
    /// Regular hours worked; required for hourly workers.
    #[serde(default)]
    pub regular_hours: Option<Decimal>,
    /// Overtime hours worked; optional for hourly workers.
    #[serde(default)]
    pub overtime_hours: Option<Decimal>,
    /// Additional withholdings beyond tax, in order.
    #[serde(default)]
    pub deductions: Vec<Decimal>,
}

impl PayrollData {
    /// Returns true if the worker is paid by the hour.
    pub fn is_hourly(&self) -> bool {
        self.compensation_type == CompensationType::Hourly
    }

    /// Returns the sum of all additional deductions, or `None` if it overflows.
    pub fn deductions_total(&self) -> Option<Decimal> {
        self.deductions
            .iter()
            .try_fold(Decimal::ZERO, |total, amount| total.checked_add(*amount))
    }
}
