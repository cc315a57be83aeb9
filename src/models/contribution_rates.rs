//! Social contribution rates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default old-age pension (AOV) contribution rate: 8%.
pub const DEFAULT_AOV_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Default widows and orphans fund (AWW) contribution rate: 1.5%.
pub const DEFAULT_AWW_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 3);

/// The flat rates used to compute social contributions from gross pay.
///
/// `Default` yields the national scheme's 8% / 1.5%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRates {
    /// Old-age pension rate, as a fraction of gross pay.
    pub aov_rate: Decimal,
    /// Widows and orphans fund rate, as a fraction of gross pay.
    pub aww_rate: Decimal,
}

impl Default for ContributionRates {
    fn default() -> Self {
        Self {
            aov_rate: DEFAULT_AOV_RATE,
            aww_rate: DEFAULT_AWW_RATE,
        }
    }
}
