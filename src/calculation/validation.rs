//! Payroll record validation.
//!
//! Checks a [`PayrollData`] record for structural correctness before any
//! calculation is attempted. Every rule is evaluated; failures are collected
//! rather than short-circuited.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{CompensationType, PayrollData, ValidationResult};

/// A single validation rule failure.
///
/// The `Display` text of each variant is the message reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// `worker_id` is empty or whitespace.
    #[error("Worker ID is required")]
    MissingWorkerId,
    /// `compensation_amount` is zero or negative.
    #[error("Compensation amount must be positive")]
    NonPositiveCompensation,
    /// An hourly record has no regular hours, or negative ones.
    #[error("Regular hours must be specified and non-negative")]
    InvalidRegularHours,
    /// An hourly record has negative overtime hours.
    #[error("Overtime hours cannot be negative")]
    NegativeOvertimeHours,
    /// At least one deduction is negative.
    #[error("Deductions cannot be negative")]
    NegativeDeductions,
}

/// Collects every rule failure for `data`, in field-check order.
///
/// The order is worker id, compensation amount, hourly hours, deductions.
/// Hours are only checked for hourly workers; negative deductions produce a
/// single issue however many there are.
pub fn collect_validation_issues(data: &PayrollData) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if data.worker_id.trim().is_empty() {
        issues.push(ValidationIssue::MissingWorkerId);
    }

    if data.compensation_amount <= Decimal::ZERO {
        issues.push(ValidationIssue::NonPositiveCompensation);
    }

    if data.compensation_type == CompensationType::Hourly {
        match data.regular_hours {
            Some(hours) if hours >= Decimal::ZERO => {}
            _ => issues.push(ValidationIssue::InvalidRegularHours),
        }

        if data.overtime_hours.is_some_and(|hours| hours < Decimal::ZERO) {
            issues.push(ValidationIssue::NegativeOvertimeHours);
        }
    }

    if data.deductions.iter().any(|deduction| *deduction < Decimal::ZERO) {
        issues.push(ValidationIssue::NegativeDeductions);
    }

    issues
}

/// Validates a payroll record, reporting every problem found.
///
/// Never fails: malformed input is described in the returned
/// [`ValidationResult`], which is valid only when no rule failed.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::validate_payroll_data;
/// use payroll_engine::models::{CompensationType, PayrollData};
/// use rust_decimal::Decimal;
///
/// let data = PayrollData {
///     worker_id: "W001".to_string(),
///     compensation_type: CompensationType::Hourly,
///     compensation_amount: Decimal::from(25),
///     regular_hours: None,
///     overtime_hours: None,
///     deductions: vec![],
/// };
///
/// let result = validate_payroll_data(&data);
/// assert!(!result.is_valid);
/// assert!(result.errors.contains(&"Regular hours must be specified and non-negative".to_string()));
/// ```
pub fn validate_payroll_data(data: &PayrollData) -> ValidationResult {
    let errors = collect_validation_issues(data)
        .into_iter()
        .map(|issue| issue.to_string())
        .collect();

    ValidationResult::from_errors(errors)
}
