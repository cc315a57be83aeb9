//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::DEFAULT_OVERTIME_MULTIPLIER;
use crate::error::{EngineError, EngineResult};
use crate::models::{ContributionRates, DEFAULT_AOV_RATE, DEFAULT_AWW_RATE, TaxBracket};

/// Metadata about the jurisdiction whose rules are configured.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionMetadata {
    /// Short jurisdiction code (e.g., "SR").
    pub code: String,
    /// The human-readable name of the jurisdiction.
    pub name: String,
    /// ISO currency code amounts are expressed in.
    pub currency: String,
    /// URL to the official source of the rates.
    #[serde(default)]
    pub source_url: Option<String>,
}

fn default_aov_rate() -> Decimal {
    DEFAULT_AOV_RATE
}

fn default_aww_rate() -> Decimal {
    DEFAULT_AWW_RATE
}

fn default_overtime_multiplier() -> Decimal {
    DEFAULT_OVERTIME_MULTIPLIER
}

/// Statutory contribution rates and the overtime multiplier.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionConfig {
    /// Old-age pension rate.
    #[serde(default = "default_aov_rate")]
    pub aov_rate: Decimal,
    /// Widows and orphans fund rate.
    #[serde(default = "default_aww_rate")]
    pub aww_rate: Decimal,
    /// Multiplier applied to overtime hours for hourly workers.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
}

impl Default for ContributionConfig {
    fn default() -> Self {
        Self {
            aov_rate: DEFAULT_AOV_RATE,
            aww_rate: DEFAULT_AWW_RATE,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

/// An annual tax table effective from a given date.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxTableConfig {
    /// The date from which this table applies.
    pub effective_date: NaiveDate,
    /// Brackets ordered ascending by `min`.
    pub brackets: Vec<TaxBracket>,
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    metadata: JurisdictionMetadata,
    contributions: ContributionConfig,
    /// Tax tables by effective date (sorted oldest first).
    tax_tables: Vec<TaxTableConfig>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(
        metadata: JurisdictionMetadata,
        contributions: ContributionConfig,
        tax_tables: Vec<TaxTableConfig>,
    ) -> Self {
        let mut sorted_tables = tax_tables;
        sorted_tables.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            contributions,
            tax_tables: sorted_tables,
        }
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns the contribution configuration.
    pub fn contributions(&self) -> &ContributionConfig {
        &self.contributions
    }

    /// Returns the configured social contribution rates.
    pub fn contribution_rates(&self) -> ContributionRates {
        ContributionRates {
            aov_rate: self.contributions.aov_rate,
            aww_rate: self.contributions.aww_rate,
        }
    }

    /// Returns the configured overtime multiplier.
    pub fn overtime_multiplier(&self) -> Decimal {
        self.contributions.overtime_multiplier
    }

    /// Returns all tax tables, oldest first.
    pub fn tax_tables(&self) -> &[TaxTableConfig] {
        &self.tax_tables
    }

    /// Returns the brackets of the most recent table effective on or before `date`.
    pub fn tax_brackets_for(&self, date: NaiveDate) -> EngineResult<&[TaxBracket]> {
        self.tax_tables
            .iter()
            .rev()
            .find(|table| table.effective_date <= date)
            .map(|table| table.brackets.as_slice())
            .ok_or(EngineError::TaxTableNotFound { date })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::SURINAME_TAX_BRACKETS;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn metadata() -> JurisdictionMetadata {
        JurisdictionMetadata {
            code: "SR".to_string(),
            name: "Suriname".to_string(),
            currency: "SRD".to_string(),
            source_url: None,
        }
    }

    fn config_with_tables() -> PayrollConfig {
        PayrollConfig::new(
            metadata(),
            ContributionConfig::default(),
            vec![
                TaxTableConfig {
                    effective_date: date(2025, 1, 1),
                    brackets: SURINAME_TAX_BRACKETS.to_vec(),
                },
                TaxTableConfig {
                    effective_date: date(2024, 1, 1),
                    brackets: vec![TaxBracket::new(Decimal::ZERO, None, dec("0.10"))],
                },
            ],
        )
    }

    #[test]
    fn test_tables_sorted_oldest_first() {
        let config = config_with_tables();
        assert_eq!(config.tax_tables()[0].effective_date, date(2024, 1, 1));
        assert_eq!(config.tax_tables()[1].effective_date, date(2025, 1, 1));
    }

    #[test]
    fn test_tax_brackets_for_picks_most_recent_effective_table() {
        let config = config_with_tables();

        assert_eq!(config.tax_brackets_for(date(2024, 6, 30)).unwrap().len(), 1);
        assert_eq!(
            config.tax_brackets_for(date(2025, 1, 1)).unwrap(),
            SURINAME_TAX_BRACKETS.as_slice()
        );
    }

    #[test]
    fn test_tax_brackets_for_date_before_any_table() {
        let config = config_with_tables();

        match config.tax_brackets_for(date(2023, 12, 31)) {
            Err(EngineError::TaxTableNotFound { date: d }) => assert_eq!(d, date(2023, 12, 31)),
            other => panic!("Expected TaxTableNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_contribution_config_defaults_when_fields_absent() {
        let config: ContributionConfig = serde_yaml::from_str("aov_rate: 0.04\n").unwrap();
        assert_eq!(config.aov_rate, dec("0.04"));
        assert_eq!(config.aww_rate, dec("0.015"));
        assert_eq!(config.overtime_multiplier, dec("1.5"));
    }

    #[test]
    fn test_contribution_rates_reflect_config() {
        let config = PayrollConfig::new(
            metadata(),
            ContributionConfig {
                aov_rate: dec("0.05"),
                aww_rate: dec("0.02"),
                overtime_multiplier: dec("2.0"),
            },
            vec![],
        );

        let rates = config.contribution_rates();
        assert_eq!(rates.aov_rate, dec("0.05"));
        assert_eq!(rates.aww_rate, dec("0.02"));
        assert_eq!(config.overtime_multiplier(), dec("2.0"));
    }
}
