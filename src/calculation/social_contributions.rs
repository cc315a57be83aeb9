//! Social contribution calculation functionality.
//!
//! Two flat-rate contributions are withheld from gross pay: the old-age
//! pension (AOV) and the widows and orphans fund (AWW). Each is rounded to
//! cents on its own, and the total is the sum of the rounded parts.

use rust_decimal::Decimal;

use crate::models::{ContributionRates, SocialContributions};

use super::round_to_cents;

/// Calculates social contributions at the default 8% / 1.5% rates.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_social_contributions;
/// use rust_decimal::Decimal;
///
/// let contributions = calculate_social_contributions(Decimal::from(5000));
/// assert_eq!(contributions.aov, Decimal::from(400));
/// assert_eq!(contributions.aww, Decimal::from(75));
/// assert_eq!(contributions.total, Decimal::from(475));
/// ```
pub fn calculate_social_contributions(gross_pay: Decimal) -> SocialContributions {
    calculate_social_contributions_with_rates(gross_pay, ContributionRates::default())
}

/// Calculates social contributions at caller-supplied rates.
///
/// # Panics
///
/// Panics if a contribution overflows the `Decimal` range, which needs a
/// rate well above 1.
pub fn calculate_social_contributions_with_rates(
    gross_pay: Decimal,
    rates: ContributionRates,
) -> SocialContributions {
    let aov = round_to_cents(gross_pay * rates.aov_rate);
    let aww = round_to_cents(gross_pay * rates.aww_rate);

    SocialContributions {
        aov,
        aww,
        total: aov + aww,
    }
}

/// Checked form of [`calculate_social_contributions_with_rates`]; `None` on overflow.
pub(crate) fn try_social_contributions(
    gross_pay: Decimal,
    rates: ContributionRates,
) -> Option<SocialContributions> {
    let aov = round_to_cents(gross_pay.checked_mul(rates.aov_rate)?);
    let aww = round_to_cents(gross_pay.checked_mul(rates.aww_rate)?);

    Some(SocialContributions {
        aov,
        aww,
        total: aov.checked_add(aww)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_rates() {
        let result = calculate_social_contributions(dec("5000"));
        assert_eq!(result.aov, dec("400"));
        assert_eq!(result.aww, dec("75"));
        assert_eq!(result.total, dec("475"));
    }

    #[test]
    fn test_each_part_rounded_before_summing() {
        // aov = 266.6664, aww = 49.99995
        let result = calculate_social_contributions(dec("3333.33"));
        assert_eq!(result.aov, dec("266.67"));
        assert_eq!(result.aww, dec("50.00"));
        assert_eq!(result.total, dec("316.67"));
    }

    #[test]
    fn test_zero_gross_pay() {
        let result = calculate_social_contributions(Decimal::ZERO);
        assert_eq!(result.aov, Decimal::ZERO);
        assert_eq!(result.aww, Decimal::ZERO);
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_custom_rates() {
        let rates = ContributionRates {
            aov_rate: dec("0.04"),
            aww_rate: dec("0.01"),
        };
        let result = calculate_social_contributions_with_rates(dec("2500"), rates);
        assert_eq!(result.aov, dec("100"));
        assert_eq!(result.aww, dec("25"));
        assert_eq!(result.total, dec("125"));
    }

    #[test]
    fn test_zero_rates() {
        let rates = ContributionRates {
            aov_rate: Decimal::ZERO,
            aww_rate: Decimal::ZERO,
        };
        let result = calculate_social_contributions_with_rates(dec("2500"), rates);
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_total_equals_sum_of_parts() {
        for gross in ["0.01", "1.99", "1234.57", "9999.99"] {
            let result = calculate_social_contributions(dec(gross));
            assert_eq!(result.total, result.aov + result.aww);
        }
    }
}
