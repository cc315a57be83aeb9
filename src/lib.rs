//! Payroll Calculation Engine
//!
//! This crate computes salary and hourly pay, progressive income tax
//! withholding, social contributions and net pay, and validates payroll
//! records before calculation. The calculation functions are pure; the
//! [`api`] module exposes them over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
