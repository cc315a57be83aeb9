//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{ContributionRates, TaxBracket};

use super::types::{ContributionConfig, JurisdictionMetadata, PayrollConfig, TaxTableConfig};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/suriname/
/// ├── jurisdiction.yaml   # Jurisdiction metadata
/// ├── contributions.yaml  # Contribution rates and overtime multiplier
/// └── tax_tables/
///     └── 2025-01-01.yaml # Tax brackets effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/suriname").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let brackets = loader.get_tax_brackets(date).unwrap();
/// println!("{} brackets in effect", brackets.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A tax table is not an ascending, contiguous bracket table
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/suriname")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<JurisdictionMetadata>(&path.join("jurisdiction.yaml"))?;
        let contributions =
            Self::load_yaml::<ContributionConfig>(&path.join("contributions.yaml"))?;
        let tax_tables = Self::load_tax_tables(&path.join("tax_tables"))?;

        debug!(
            jurisdiction = %metadata.code,
            tax_tables = tax_tables.len(),
            "Loaded payroll configuration"
        );

        let config = PayrollConfig::new(metadata, contributions, tax_tables);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads and checks all tax tables from the tax_tables directory.
    fn load_tax_tables(tables_dir: &Path) -> EngineResult<Vec<TaxTableConfig>> {
        let tables_dir_str = tables_dir.display().to_string();

        if !tables_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: tables_dir_str,
            });
        }

        let entries = fs::read_dir(tables_dir).map_err(|_| EngineError::ConfigNotFound {
            path: tables_dir_str.clone(),
        })?;

        let mut tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: tables_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let table = Self::load_yaml::<TaxTableConfig>(&path)?;
                check_tax_table(&table.brackets).map_err(|message| {
                    EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message,
                    }
                })?;
                tables.push(table);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no tax tables found)", tables_dir_str),
            });
        }

        Ok(tables)
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        self.config.jurisdiction()
    }

    /// Gets the tax brackets in effect on a given date.
    ///
    /// Picks the most recent table whose effective date is on or before
    /// `date`, or returns `TaxTableNotFound`.
    pub fn get_tax_brackets(&self, date: NaiveDate) -> EngineResult<&[TaxBracket]> {
        self.config.tax_brackets_for(date)
    }

    /// Returns the configured social contribution rates.
    pub fn contribution_rates(&self) -> ContributionRates {
        self.config.contribution_rates()
    }

    /// Returns the configured overtime multiplier.
    pub fn overtime_multiplier(&self) -> Decimal {
        self.config.overtime_multiplier()
    }
}

/// Checks that a bracket table starts at zero, is contiguous and ascending,
/// ends with the only unbounded bracket, and uses rates within [0, 1].
fn check_tax_table(brackets: &[TaxBracket]) -> Result<(), String> {
    let first = brackets
        .first()
        .ok_or_else(|| "tax table has no brackets".to_string())?;

    if first.min != Decimal::ZERO {
        return Err(format!("first bracket must start at 0, found {}", first.min));
    }

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return Err(format!("bracket {} has rate {} outside [0, 1]", index, bracket.rate));
        }

        let is_last = index + 1 == brackets.len();
        match (bracket.max, is_last) {
            (None, true) => {}
            (None, false) => {
                return Err(format!("bracket {} is unbounded but is not the last", index));
            }
            (Some(_), true) => {
                return Err("last bracket must be unbounded".to_string());
            }
            (Some(max), false) => {
                if max <= bracket.min {
                    return Err(format!("bracket {} has max {} not above min {}", index, max, bracket.min));
                }
                let next_min = brackets[index + 1].min;
                if next_min != max {
                    return Err(format!(
                        "gap between bracket {} (max {}) and bracket {} (min {})",
                        index,
                        max,
                        index + 1,
                        next_min
                    ));
                }
            }
        }
    }

    Ok(())
}
