//! Error types for the Payroll Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The pure calculation functions never fail; errors only arise from
//! configuration loading, parsing external input, and payslip composition.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Payroll Calculation Engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or holds an invalid value.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No tax table is effective on the requested date.
    #[error("No tax table effective on {date}")]
    TaxTableNotFound {
        /// The date for which a tax table was requested.
        date: NaiveDate,
    },

    /// A pay frequency string did not match any known frequency.
    #[error("Unknown pay frequency: {value}")]
    UnknownPayFrequency {
        /// The unrecognized value.
        value: String,
    },

    /// A payroll record failed validation.
    #[error("Invalid payroll data for worker '{worker_id}': {}", .errors.join("; "))]
    InvalidPayrollData {
        /// The worker the record belongs to (may be empty).
        worker_id: String,
        /// Every validation message, in check order.
        errors: Vec<String>,
    },

    /// An amount in payslip composition overflowed the decimal range.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
