//! HTTP request handlers for the Payroll Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_payslip, validate_payroll_data};
use crate::models::PayrollData;

use super::request::{PayrollDataRequest, PayslipRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/validate", post(validate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Validates the payroll record and returns the calculated payslip.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let data: PayrollData = request.payroll.into();
    let config = state.config().config();

    match calculate_payslip(&data, request.pay_frequency, config, request.pay_date) {
        Ok(payslip) => {
            info!(
                correlation_id = %correlation_id,
                worker_id = %payslip.worker_id,
                gross_pay = %payslip.gross_pay,
                net_pay = %payslip.net_pay,
                duration_us = payslip.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, payslip)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

/// Handler for POST /validate endpoint.
///
/// Always answers 200 with the validation result for a well-formed body.
async fn validate_handler(payload: Result<Json<PayrollDataRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let data: PayrollData = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let result = validate_payroll_data(&data);
    info!(
        correlation_id = %correlation_id,
        worker_id = %data.worker_id,
        is_valid = result.is_valid,
        error_count = result.errors.len(),
        "Validated payroll data"
    );

    json_response(StatusCode::OK, result)
}

/// Serializes `body` as a JSON response with an explicit content type.
fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}
