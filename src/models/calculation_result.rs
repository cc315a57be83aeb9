//! Calculation result models for the Payroll Calculation Engine.
//!
//! This module contains the plain result shapes returned by the engine
//! ([`SocialContributions`], [`ValidationResult`]) and the composite
//! [`Payslip`] with its audit trace.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CompensationType, PayFrequency};

/// Breakdown of the social contributions withheld from gross pay.
///
/// `aov` and `aww` are each rounded to cents and `total` is their exact sum.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SocialContributions;
/// use rust_decimal::Decimal;
///
/// let contributions = SocialContributions {
///     aov: Decimal::new(40000, 2),
///     aww: Decimal::new(7500, 2),
///     total: Decimal::new(47500, 2),
/// };
/// assert_eq!(contributions.aov + contributions.aww, contributions.total);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialContributions {
    /// Old-age pension contribution.
    pub aov: Decimal,
    /// Widows and orphans fund contribution.
    pub aww: Decimal,
    /// Sum of the rounded `aov` and `aww`.
    pub total: Decimal,
}

/// Outcome of validating a payroll record.
///
/// `is_valid` is true exactly when `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the record passed every check.
    pub is_valid: bool,
    /// One message per failed check, in check order.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Builds a result from the collected error messages.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of calculating one worker's pay for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The worker the payslip is for.
    pub worker_id: String,
    /// How the worker is compensated.
    pub compensation_type: CompensationType,
    /// The pay frequency the period amounts are expressed in.
    pub pay_frequency: PayFrequency,
    /// The date used to select the effective tax table.
    pub pay_date: NaiveDate,
    /// Gross pay for the period.
    pub gross_pay: Decimal,
    /// Income tax withheld for the period.
    pub tax_withholding: Decimal,
    /// Social contributions withheld for the period.
    pub social_contributions: SocialContributions,
    /// Sum of the record's additional deductions.
    pub deductions_total: Decimal,
    /// Net pay after tax, contributions and deductions, never negative.
    pub net_pay: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_validation_result_valid_when_no_errors() {
        let result = ValidationResult::from_errors(vec![]);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_validation_result_invalid_with_errors() {
        let result = ValidationResult::from_errors(vec!["Worker ID is required".to_string()]);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_validation_result_serialization() {
        let result = ValidationResult::from_errors(vec!["Worker ID is required".to_string()]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["is_valid"], false);
        assert_eq!(json["errors"][0], "Worker ID is required");
    }

    #[test]
    fn test_social_contributions_serialize_as_strings() {
        let contributions = SocialContributions {
            aov: dec("266.67"),
            aww: dec("50.00"),
            total: dec("316.67"),
        };

        let json = serde_json::to_string(&contributions).unwrap();
        assert!(json.contains("\"aov\":\"266.67\""));
        assert!(json.contains("\"aww\":\"50.00\""));
        assert!(json.contains("\"total\":\"316.67\""));
    }

    #[test]
    fn test_payslip_round_trip() {
        let payslip = Payslip {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            worker_id: "W001".to_string(),
            compensation_type: CompensationType::Salary,
            pay_frequency: PayFrequency::Monthly,
            pay_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            gross_pay: dec("5000.00"),
            tax_withholding: dec("437.50"),
            social_contributions: SocialContributions {
                aov: dec("400.00"),
                aww: dec("75.00"),
                total: dec("475.00"),
            },
            deductions_total: dec("0"),
            net_pay: dec("4087.50"),
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![],
                duration_us: 12,
            },
        };

        let json = serde_json::to_string(&payslip).unwrap();
        assert!(json.contains("\"pay_frequency\":\"monthly\""));
        assert!(json.contains("\"compensation_type\":\"salary\""));

        let deserialized: Payslip = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, payslip);
    }
}
