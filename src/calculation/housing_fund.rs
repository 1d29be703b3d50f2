//! Housing fund contribution calculation.

use rust_decimal::Decimal;

use crate::config::HousingFundRule;
use crate::error::EngineResult;

use super::basis::{ensure_valid_basis, monthly_from_weekly};

/// Rule identifier used in errors and the audit trail.
pub const HOUSING_FUND_RULE: &str = "housing_fund";

/// Computes the employee housing fund contribution.
///
/// Below the lower threshold nothing is due. From the lower threshold up to
/// and including the upper threshold the lower rate applies; above it the
/// upper rate applies. The result never exceeds the configured maximum.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidBasis`] for a negative basis.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_housing_fund;
/// use payroll_engine::config::HousingFundRule;
/// use rust_decimal::Decimal;
///
/// let rule = HousingFundRule::default();
/// let share = calculate_housing_fund(Decimal::new(1501, 0), &rule).unwrap();
/// assert_eq!(share, Decimal::new(3002, 2));
/// ```
pub fn calculate_housing_fund(basis: Decimal, rule: &HousingFundRule) -> EngineResult<Decimal> {
    ensure_valid_basis(HOUSING_FUND_RULE, basis)?;

    let contribution = if basis < rule.lower_threshold {
        Decimal::ZERO
    } else if basis <= rule.upper_threshold {
        basis * rule.lower_rate
    } else {
        basis * rule.upper_rate
    };
    Ok(contribution.min(rule.maximum))
}

/// Scales a weekly basis by four and computes the monthly contribution.
pub fn calculate_housing_fund_from_weekly(
    weekly_basis: Decimal,
    rule: &HousingFundRule,
) -> EngineResult<Decimal> {
    let monthly = monthly_from_weekly(HOUSING_FUND_RULE, weekly_basis)?;
    calculate_housing_fund(monthly, rule)
}
