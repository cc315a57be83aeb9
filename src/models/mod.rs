//! Core data models for the Payroll Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod contribution_rates;
mod pay_frequency;
mod payroll_data;
mod tax_bracket;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, Payslip, SocialContributions, ValidationResult,
};
pub use contribution_rates::{ContributionRates, DEFAULT_AOV_RATE, DEFAULT_AWW_RATE};
pub use pay_frequency::PayFrequency;
pub use payroll_data::{CompensationType, PayrollData};
pub use tax_bracket::TaxBracket;
