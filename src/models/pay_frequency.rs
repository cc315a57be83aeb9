//! Pay frequency model.
//!
//! A [`PayFrequency`] fixes how many pay periods make up a year, which is
//! how annual salaries and annual tax tables are brought down to one period.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// How often a worker is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayFrequency {
    /// Paid every week (52 periods per year).
    Weekly,
    /// Paid every other week (26 periods per year).
    BiWeekly,
    /// Paid twice a month (24 periods per year).
    SemiMonthly,
    /// Paid once a month (12 periods per year).
    Monthly,
}

impl PayFrequency {
    /// All supported frequencies, shortest period first.
    pub const ALL: [PayFrequency; 4] = [
        PayFrequency::Weekly,
        PayFrequency::BiWeekly,
        PayFrequency::SemiMonthly,
        PayFrequency::Monthly,
    ];

    /// Returns the fixed number of pay periods in a year.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::PayFrequency;
    ///
    /// assert_eq!(PayFrequency::BiWeekly.periods_per_year(), 26);
    /// ```
    pub fn periods_per_year(self) -> u32 {
        match self {
            PayFrequency::Weekly => 52,
            PayFrequency::BiWeekly => 26,
            PayFrequency::SemiMonthly => 24,
            PayFrequency::Monthly => 12,
        }
    }

    /// Returns the number of pay periods in a year as a decimal divisor.
    pub fn periods_per_year_decimal(self) -> Decimal {
        Decimal::from(self.periods_per_year())
    }

    /// Returns the canonical spelling used in requests and configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            PayFrequency::Weekly => "weekly",
            PayFrequency::BiWeekly => "bi-weekly",
            PayFrequency::SemiMonthly => "semi-monthly",
            PayFrequency::Monthly => "monthly",
        }
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayFrequency {
    type Err = EngineError;

    /// Parses a frequency, rejecting anything that is not one of the four
    /// canonical spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PayFrequency::ALL
            .into_iter()
            .find(|frequency| frequency.as_str() == s)
            .ok_or_else(|| EngineError::UnknownPayFrequency {
                value: s.to_string(),
            })
    }
}
