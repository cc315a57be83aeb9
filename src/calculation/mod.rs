//! Calculation logic for the Payroll Calculation Engine.
//!
//! This module contains the pure calculation functions: salary and hourly
//! pay, progressive tax withholding, social contributions, net pay, and
//! payroll record validation. Each is stateless and rounds monetary results
//! to cents. [`calculate_payslip`] composes them for one pay period.

mod hourly_pay;
mod net_pay;
mod payslip;
mod rounding;
mod salary_pay;
mod social_contributions;
mod tax_withholding;
mod validation;

pub use hourly_pay::{
    DEFAULT_OVERTIME_MULTIPLIER, calculate_hourly_pay, calculate_hourly_pay_with_multiplier,
};
pub use net_pay::calculate_net_pay;
pub use payslip::{NET_PAY_CLAMPED_WARNING, calculate_payslip};
pub use rounding::round_to_cents;
pub use salary_pay::calculate_salary_pay;
pub use social_contributions::{
    calculate_social_contributions, calculate_social_contributions_with_rates,
};
pub use tax_withholding::{SURINAME_TAX_BRACKETS, calculate_tax_withholding};
pub use validation::{ValidationIssue, collect_validation_issues, validate_payroll_data};
