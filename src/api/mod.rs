//! HTTP API module for the Payroll Calculation Engine.
//!
//! This module provides the REST API endpoints for calculating payslips
//! and validating payroll records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PayrollDataRequest, PayslipRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
