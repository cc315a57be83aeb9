//! Payslip composition.
//!
//! Runs one payroll record through the engine for a single pay period:
//! validation, gross pay, annualised tax withholding, social contributions
//! and net pay, recording an audit step for each.

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CompensationType, PayFrequency, PayrollData, Payslip,
};

use super::hourly_pay::try_hourly_pay;
use super::net_pay::try_unclamped_net_pay;
use super::social_contributions::try_social_contributions;
use super::tax_withholding::try_tax_withholding;
use super::{calculate_salary_pay, round_to_cents, validate_payroll_data};

/// Warning code recorded when deductions exceed the pay they are taken from.
pub const NET_PAY_CLAMPED_WARNING: &str = "NET_PAY_CLAMPED";

/// Calculates a complete payslip for one worker and one pay period.
///
/// The record is validated first; any failure returns
/// [`EngineError::InvalidPayrollData`] with every message. Tax is withheld on
/// the annualised gross pay using the table effective on `pay_date`, then
/// divided back over the year's pay periods. Social contributions are taken
/// alongside the record's own deductions when computing net pay.
///
/// # Errors
///
/// - `InvalidPayrollData` if the record fails validation
/// - `TaxTableNotFound` if no table is effective on `pay_date`
/// - `CalculationError` if an amount overflows the `Decimal` range
pub fn calculate_payslip(
    data: &PayrollData,
    frequency: PayFrequency,
    config: &PayrollConfig,
    pay_date: NaiveDate,
) -> EngineResult<Payslip> {
    let start_time = Instant::now();
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let validation = validate_payroll_data(data);
    if !validation.is_valid {
        return Err(EngineError::InvalidPayrollData {
            worker_id: data.worker_id.clone(),
            errors: validation.errors,
        });
    }
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "payroll_validation".to_string(),
        rule_name: "Payroll Data Validation".to_string(),
        input: serde_json::json!({ "worker_id": data.worker_id }),
        output: serde_json::json!({ "is_valid": true }),
        reasoning: "All payroll data checks passed".to_string(),
    });
    step_number += 1;

    let (gross_pay, gross_step) = gross_pay_step(data, frequency, config, step_number)?;
    audit_steps.push(gross_step);
    step_number += 1;

    let brackets = config.tax_brackets_for(pay_date)?;
    let periods = frequency.periods_per_year_decimal();
    let annual_income = gross_pay
        .checked_mul(periods)
        .ok_or_else(|| overflow("annual income"))?;
    let annual_tax =
        try_tax_withholding(annual_income, brackets).ok_or_else(|| overflow("tax withholding"))?;
    let tax_withholding = round_to_cents(annual_tax / periods);
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "tax_withholding".to_string(),
        rule_name: "Progressive Tax Withholding".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.to_string(),
            "periods_per_year": frequency.periods_per_year(),
            "pay_date": pay_date.to_string(),
            "brackets": brackets.len()
        }),
        output: serde_json::json!({
            "annual_income": annual_income.normalize().to_string(),
            "annual_tax": annual_tax.to_string(),
            "tax_withholding": tax_withholding.to_string()
        }),
        reasoning: format!(
            "${} x {} = ${} annual income; ${} annual tax / {} = ${}",
            gross_pay,
            frequency.periods_per_year(),
            annual_income.normalize(),
            annual_tax,
            frequency.periods_per_year(),
            tax_withholding
        ),
    });
    step_number += 1;

    let rates = config.contribution_rates();
    let social_contributions = try_social_contributions(gross_pay, rates)
        .ok_or_else(|| overflow("social contributions"))?;
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "social_contributions".to_string(),
        rule_name: "Social Contributions".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.to_string(),
            "aov_rate": rates.aov_rate.normalize().to_string(),
            "aww_rate": rates.aww_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "aov": social_contributions.aov.to_string(),
            "aww": social_contributions.aww.to_string(),
            "total": social_contributions.total.to_string()
        }),
        reasoning: format!(
            "AOV ${} + AWW ${} = ${}",
            social_contributions.aov, social_contributions.aww, social_contributions.total
        ),
    });
    step_number += 1;

    let deductions_total = data
        .deductions_total()
        .ok_or_else(|| overflow("deductions total"))?;
    let mut withholdings = data.deductions.clone();
    withholdings.push(social_contributions.total);

    let raw_net_pay = try_unclamped_net_pay(gross_pay, tax_withholding, &withholdings)
        .ok_or_else(|| overflow("net pay"))?;
    let net_pay = raw_net_pay.max(Decimal::ZERO);
    if raw_net_pay < Decimal::ZERO {
        warn!(
            worker_id = %data.worker_id,
            raw_net_pay = %raw_net_pay,
            "Withholdings exceed gross pay, net pay clamped to zero"
        );
        warnings.push(AuditWarning {
            code: NET_PAY_CLAMPED_WARNING.to_string(),
            message: format!(
                "Withholdings exceed gross pay by ${}; net pay clamped to $0",
                -raw_net_pay
            ),
            severity: "high".to_string(),
        });
    }
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.to_string(),
            "tax_withholding": tax_withholding.to_string(),
            "social_contributions": social_contributions.total.to_string(),
            "deductions_total": deductions_total.to_string()
        }),
        output: serde_json::json!({
            "net_pay": net_pay.to_string(),
            "clamped": raw_net_pay < Decimal::ZERO
        }),
        reasoning: format!(
            "${} - ${} tax - ${} contributions - ${} deductions = ${}",
            gross_pay, tax_withholding, social_contributions.total, deductions_total, net_pay
        ),
    });

    let duration_us = start_time.elapsed().as_micros() as u64;
    debug!(
        worker_id = %data.worker_id,
        gross_pay = %gross_pay,
        net_pay = %net_pay,
        duration_us,
        "Payslip calculated"
    );

    Ok(Payslip {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        worker_id: data.worker_id.clone(),
        compensation_type: data.compensation_type,
        pay_frequency: frequency,
        pay_date,
        gross_pay,
        tax_withholding,
        social_contributions,
        deductions_total,
        net_pay,
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings,
            duration_us,
        },
    })
}

fn overflow(quantity: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("{} exceeds the supported decimal range", quantity),
    }
}

/// Computes gross pay for the period and the audit step describing it.
///
/// Expects a validated record: hourly records carry regular hours.
fn gross_pay_step(
    data: &PayrollData,
    frequency: PayFrequency,
    config: &PayrollConfig,
    step_number: u32,
) -> EngineResult<(Decimal, AuditStep)> {
    match data.compensation_type {
        CompensationType::Salary => {
            let gross_pay = calculate_salary_pay(data.compensation_amount, frequency);
            let step = AuditStep {
                step_number,
                rule_id: "salary_pay".to_string(),
                rule_name: "Salary Pay".to_string(),
                input: serde_json::json!({
                    "annual_amount": data.compensation_amount.to_string(),
                    "pay_frequency": frequency.as_str()
                }),
                output: serde_json::json!({ "gross_pay": gross_pay.to_string() }),
                reasoning: format!(
                    "${} / {} pay periods = ${}",
                    data.compensation_amount,
                    frequency.periods_per_year(),
                    gross_pay
                ),
            };
            Ok((gross_pay, step))
        }
        CompensationType::Hourly => {
            let regular_hours = data.regular_hours.unwrap_or(Decimal::ZERO);
            let overtime_hours = data.overtime_hours.unwrap_or(Decimal::ZERO);
            let multiplier = config.overtime_multiplier();
            let gross_pay = try_hourly_pay(
                data.compensation_amount,
                regular_hours,
                overtime_hours,
                multiplier,
            )
            .ok_or_else(|| overflow("hourly gross pay"))?;
            let step = AuditStep {
                step_number,
                rule_id: "hourly_pay".to_string(),
                rule_name: "Hourly Pay".to_string(),
                input: serde_json::json!({
                    "hourly_rate": data.compensation_amount.to_string(),
                    "regular_hours": regular_hours.to_string(),
                    "overtime_hours": overtime_hours.to_string(),
                    "overtime_multiplier": multiplier.normalize().to_string()
                }),
                output: serde_json::json!({ "gross_pay": gross_pay.to_string() }),
                reasoning: format!(
                    "{} hours x ${} + {} overtime hours x ${} x {} = ${}",
                    regular_hours,
                    data.compensation_amount,
                    overtime_hours,
                    data.compensation_amount,
                    multiplier.normalize(),
                    gross_pay
                ),
            };
            Ok((gross_pay, step))
        }
    }
}
