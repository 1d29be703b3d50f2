//! Health insurance contribution calculation.

use rust_decimal::Decimal;

use crate::config::HealthInsuranceRule;
use crate::error::EngineResult;

use super::basis::{ensure_valid_basis, monthly_from_weekly};

/// Rule identifier used in errors and the audit trail.
pub const HEALTH_INSURANCE_RULE: &str = "health_insurance";

/// Computes the employee share of the health insurance premium.
///
/// A basis at or below the minimum threshold pays the fixed minimum, a basis
/// above the maximum threshold pays the fixed maximum, and anything between
/// pays `basis × rate ÷ share_divisor`.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidBasis`] for a negative basis.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_health_insurance;
/// use payroll_engine::config::HealthInsuranceRule;
/// use rust_decimal::Decimal;
///
/// let rule = HealthInsuranceRule::default();
/// let share = calculate_health_insurance(Decimal::new(20000, 0), &rule).unwrap();
/// assert_eq!(share, Decimal::new(300, 0));
/// ```
pub fn calculate_health_insurance(
    basis: Decimal,
    rule: &HealthInsuranceRule,
) -> EngineResult<Decimal> {
    ensure_valid_basis(HEALTH_INSURANCE_RULE, basis)?;

    let share = if basis <= rule.minimum_threshold {
        rule.minimum
    } else if basis <= rule.maximum_threshold {
        basis * rule.rate / rule.share_divisor
    } else {
        rule.maximum
    };
    Ok(share)
}

/// Scales a weekly basis by four and computes the monthly share.
pub fn calculate_health_insurance_from_weekly(
    weekly_basis: Decimal,
    rule: &HealthInsuranceRule,
) -> EngineResult<Decimal> {
    let monthly = monthly_from_weekly(HEALTH_INSURANCE_RULE, weekly_basis)?;
    calculate_health_insurance(monthly, rule)
}
