//! Property tests for the calculation functions.
//!
//! Amounts are generated as whole cents so every input is a realistic
//! two-decimal monetary value.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::calculation::{
    SURINAME_TAX_BRACKETS, calculate_hourly_pay, calculate_net_pay, calculate_payslip,
    calculate_salary_pay, calculate_social_contributions, calculate_tax_withholding,
    round_to_cents, validate_payroll_data,
};
use payroll_engine::config::ConfigLoader;
use payroll_engine::models::{CompensationType, PayFrequency, PayrollData};

// =============================================================================
// Strategies
// =============================================================================

fn money(max_cents: i64) -> impl Strategy<Value = Decimal> {
    (0..=max_cents).prop_map(|cents| Decimal::new(cents, 2))
}

fn positive_money(max_cents: i64) -> impl Strategy<Value = Decimal> {
    (1..=max_cents).prop_map(|cents| Decimal::new(cents, 2))
}

fn hours() -> impl Strategy<Value = Decimal> {
    (0..=8000i64).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

fn frequency() -> impl Strategy<Value = PayFrequency> {
    prop::sample::select(PayFrequency::ALL.to_vec())
}

fn signed_money(max_cents: i64) -> impl Strategy<Value = Decimal> {
    (-max_cents..=max_cents).prop_map(|cents| Decimal::new(cents, 2))
}

fn payroll_record() -> impl Strategy<Value = PayrollData> {
    (
        prop::sample::select(vec!["", "  ", "W001"]),
        prop::sample::select(vec![CompensationType::Salary, CompensationType::Hourly]),
        signed_money(10_000_000),
        prop::option::of(signed_money(8_000)),
        prop::option::of(signed_money(2_000)),
        prop::collection::vec(signed_money(100_000), 0..4),
    )
        .prop_map(
            |(worker_id, compensation_type, amount, regular, overtime, deductions)| PayrollData {
                worker_id: worker_id.to_string(),
                compensation_type,
                compensation_amount: amount,
                regular_hours: regular,
                overtime_hours: overtime,
                deductions,
            },
        )
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn salary_pay_has_at_most_two_decimals(annual in positive_money(100_000_000), freq in frequency()) {
        let pay = calculate_salary_pay(annual, freq);
        prop_assert!(pay.scale() <= 2);
        prop_assert_eq!(pay, calculate_salary_pay(annual, freq));
    }

    #[test]
    fn hourly_pay_without_overtime_is_rate_times_hours(rate in positive_money(50_000), regular in hours()) {
        let pay = calculate_hourly_pay(rate, regular, Decimal::ZERO);
        prop_assert_eq!(pay, round_to_cents(regular * rate));
    }

    #[test]
    fn overtime_never_lowers_hourly_pay(rate in positive_money(50_000), regular in hours(), overtime in hours()) {
        let with_overtime = calculate_hourly_pay(rate, regular, overtime);
        let without = calculate_hourly_pay(rate, regular, Decimal::ZERO);
        prop_assert!(with_overtime >= without);
    }

    #[test]
    fn hourly_pay_is_repeatable(rate in positive_money(50_000), regular in hours(), overtime in hours()) {
        prop_assert_eq!(
            calculate_hourly_pay(rate, regular, overtime),
            calculate_hourly_pay(rate, regular, overtime)
        );
    }

    #[test]
    fn tax_is_repeatable(income in money(50_000_000)) {
        prop_assert_eq!(
            calculate_tax_withholding(income, &SURINAME_TAX_BRACKETS),
            calculate_tax_withholding(income, &SURINAME_TAX_BRACKETS)
        );
    }

    #[test]
    fn contributions_are_repeatable(gross in money(10_000_000)) {
        prop_assert_eq!(
            calculate_social_contributions(gross),
            calculate_social_contributions(gross)
        );
    }

    #[test]
    fn net_pay_is_repeatable(
        gross in money(1_000_000),
        tax in money(1_000_000),
        deductions in prop::collection::vec(money(500_000), 0..5),
    ) {
        prop_assert_eq!(
            calculate_net_pay(gross, tax, &deductions),
            calculate_net_pay(gross, tax, &deductions)
        );
    }

    #[test]
    fn validation_is_repeatable(data in payroll_record()) {
        let first = validate_payroll_data(&data);
        prop_assert_eq!(&first, &validate_payroll_data(&data));
        prop_assert_eq!(first.is_valid, first.errors.is_empty());
    }

    #[test]
    fn tax_is_zero_within_allowance(income in money(1_500_000)) {
        prop_assert_eq!(calculate_tax_withholding(income, &SURINAME_TAX_BRACKETS), Decimal::ZERO);
    }

    #[test]
    fn tax_is_monotonic(a in money(50_000_000), b in money(50_000_000)) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            calculate_tax_withholding(low, &SURINAME_TAX_BRACKETS)
                <= calculate_tax_withholding(high, &SURINAME_TAX_BRACKETS)
        );
    }

    #[test]
    fn tax_never_exceeds_top_rate(income in money(50_000_000)) {
        let tax = calculate_tax_withholding(income, &SURINAME_TAX_BRACKETS);
        let ceiling = round_to_cents(income * Decimal::new(15, 2));
        prop_assert!(tax <= ceiling);
        prop_assert!(tax.scale() <= 2);
    }

    #[test]
    fn contributions_total_is_sum_of_parts(gross in money(10_000_000)) {
        let contributions = calculate_social_contributions(gross);
        prop_assert_eq!(contributions.total, contributions.aov + contributions.aww);
        prop_assert!(contributions.aov.scale() <= 2);
        prop_assert!(contributions.aww.scale() <= 2);
    }

    #[test]
    fn net_pay_is_never_negative(
        gross in money(1_000_000),
        tax in money(1_000_000),
        deductions in prop::collection::vec(money(500_000), 0..5),
    ) {
        let net = calculate_net_pay(gross, tax, &deductions);
        prop_assert!(net >= Decimal::ZERO);
        prop_assert!(net <= gross);
    }

    #[test]
    fn payslip_components_reconcile(
        annual in positive_money(50_000_000),
        freq in frequency(),
        deduction in money(100_000),
    ) {
        let loader = ConfigLoader::load("./config/suriname").unwrap();
        let data = PayrollData {
            worker_id: "P001".to_string(),
            compensation_type: CompensationType::Salary,
            compensation_amount: annual,
            regular_hours: None,
            overtime_hours: None,
            deductions: vec![deduction],
        };
        let pay_date = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();

        let payslip = calculate_payslip(&data, freq, loader.config(), pay_date).unwrap();
        let raw_net_pay = payslip.gross_pay
            - payslip.tax_withholding
            - payslip.social_contributions.total
            - payslip.deductions_total;

        prop_assert_eq!(payslip.net_pay, raw_net_pay.max(Decimal::ZERO));
        prop_assert_eq!(payslip.audit_trace.warnings.is_empty(), raw_net_pay >= Decimal::ZERO);
    }
}
