//! Configuration loading and management for the Payroll Calculation Engine.
//!
//! This module provides functionality to load payroll configurations from YAML files,
//! including jurisdiction metadata, contribution rates, and dated tax tables.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/suriname").unwrap();
//! println!("Loaded jurisdiction: {}", config.jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ContributionConfig, JurisdictionMetadata, PayrollConfig, TaxTableConfig};
