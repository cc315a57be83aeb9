//! Request types for the Payroll Calculation Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and `/validate` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CompensationType, PayFrequency, PayrollData};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// The worker's payroll record.
    pub payroll: PayrollDataRequest,
    /// How often the worker is paid.
    pub pay_frequency: PayFrequency,
    /// The date that selects the effective tax table.
    pub pay_date: NaiveDate,
}

/// Payroll record in a request; also the body of `/validate`.
///
/// Fields the validator checks default when absent so that the validator,
/// rather than JSON parsing, reports them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollDataRequest {
    /// Identifier of the worker being paid.
    #[serde(default)]
    pub worker_id: String,
    /// Whether the amount is an annual salary or an hourly rate.
    pub compensation_type: CompensationType,
    /// Annual salary or hourly rate.
    #[serde(default)]
    pub compensation_amount: Decimal,
    /// Regular hours worked.
    #[serde(default)]
    pub regular_hours: Option<Decimal>,
    /// Overtime hours worked.
    #[serde(default)]
    pub overtime_hours: Option<Decimal>,
    /// Additional deductions.
    #[serde(default)]
    pub deductions: Vec<Decimal>,
}

impl From<PayrollDataRequest> for PayrollData {
    fn from(req: PayrollDataRequest) -> Self {
        PayrollData {
            worker_id: req.worker_id,
            compensation_type: req.compensation_type,
            compensation_amount: req.compensation_amount,
            regular_hours: req.regular_hours,
            overtime_hours: req.overtime_hours,
            deductions: req.deductions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_payslip_request() {
        let json = r#"{
            "payroll": {
                "worker_id": "W001",
                "compensation_type": "salary",
                "compensation_amount": "60000",
                "deductions": ["100"]
            },
            "pay_frequency": "bi-weekly",
            "pay_date": "2025-06-30"
        }"#;

        let request: PayslipRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.payroll.worker_id, "W001");
        assert_eq!(request.payroll.compensation_type, CompensationType::Salary);
        assert_eq!(request.pay_frequency, PayFrequency::BiWeekly);
        assert_eq!(request.pay_date, NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
    }

    #[test]
    fn test_missing_validated_fields_default() {
        let json = r#"{ "compensation_type": "hourly" }"#;

        let request: PayrollDataRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.worker_id, "");
        assert_eq!(request.compensation_amount, Decimal::ZERO);
        assert_eq!(request.regular_hours, None);
        assert!(request.deductions.is_empty());
    }

    #[test]
    fn test_missing_compensation_type_is_rejected() {
        let json = r#"{ "worker_id": "W001", "compensation_amount": 25 }"#;

        let result: Result<PayrollDataRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_payroll_data_conversion() {
        let req = PayrollDataRequest {
            worker_id: "W002".to_string(),
            compensation_type: CompensationType::Hourly,
            compensation_amount: Decimal::from_str("22.50").unwrap(),
            regular_hours: Some(Decimal::from(38)),
            overtime_hours: None,
            deductions: vec![Decimal::from(10)],
        };

        let data: PayrollData = req.into();
        assert_eq!(data.worker_id, "W002");
        assert!(data.is_hourly());
        assert_eq!(data.deductions, vec![Decimal::from(10)]);
    }
}
