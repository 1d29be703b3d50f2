//! Social security contribution calculation.
//!
//! The contribution is a step function of the monthly basis: each bracket
//! covers the amounts strictly below its `below` bound, and a basis at or
//! above the last bound pays the table maximum.

use rust_decimal::Decimal;

use crate::config::SocialSecurityTable;
use crate::error::EngineResult;

use super::basis::{ensure_valid_basis, monthly_from_weekly};

/// Rule identifier used in errors and the audit trail.
pub const SOCIAL_SECURITY_RULE: &str = "social_security";

/// Looks up the employee share for a monthly basis.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidBasis`] for a negative basis.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_social_security;
/// use payroll_engine::config::SocialSecurityTable;
/// use rust_decimal::Decimal;
///
/// let table = SocialSecurityTable::default();
/// let share = calculate_social_security(Decimal::new(16000, 0), &table).unwrap();
/// assert_eq!(share, Decimal::new(72000, 2));
/// ```
pub fn calculate_social_security(
    basis: Decimal,
    table: &SocialSecurityTable,
) -> EngineResult<Decimal> {
    ensure_valid_basis(SOCIAL_SECURITY_RULE, basis)?;

    Ok(table
        .brackets
        .iter()
        .find(|bracket| basis < bracket.below)
        .map_or(table.maximum, |bracket| bracket.employee_share))
}

/// Scales a weekly basis by four and looks up the monthly share.
pub fn calculate_social_security_from_weekly(
    weekly_basis: Decimal,
    table: &SocialSecurityTable,
) -> EngineResult<Decimal> {
    let monthly = monthly_from_weekly(SOCIAL_SECURITY_RULE, weekly_basis)?;
    calculate_social_security(monthly, table)
}
