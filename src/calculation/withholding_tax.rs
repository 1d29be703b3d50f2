//! Withholding tax calculation.
//!
//! The tax is a progressive bracket table applied to the monthly basis. A
//! bracket covers amounts up to and including its `up_to` bound; the last
//! bracket is open-ended. Within a bracket the tax is
//! `base_tax + (basis - excess_over) × rate`.

use rust_decimal::Decimal;

use crate::config::WithholdingTaxTable;
use crate::error::{EngineError, EngineResult};

use super::basis::{ensure_valid_basis, monthly_from_weekly};

/// Rule identifier used in errors and the audit trail.
pub const WITHHOLDING_TAX_RULE: &str = "withholding_tax";

/// Computes the monthly withholding tax.
///
/// The bracket formula is applied as configured, without clamping. With the
/// built-in table a basis strictly between 20832 and 20833 yields a tiny
/// negative amount, and 20833 itself yields zero.
///
/// # Errors
///
/// - [`EngineError::InvalidBasis`] for a negative basis
/// - [`EngineError::InvalidConfig`] if no bracket covers the basis
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_withholding_tax;
/// use payroll_engine::config::WithholdingTaxTable;
/// use rust_decimal::Decimal;
///
/// let table = WithholdingTaxTable::default();
/// let tax = calculate_withholding_tax(Decimal::new(33333, 0), &table).unwrap();
/// assert_eq!(tax, Decimal::new(2500, 0));
/// ```
pub fn calculate_withholding_tax(
    basis: Decimal,
    table: &WithholdingTaxTable,
) -> EngineResult<Decimal> {
    ensure_valid_basis(WITHHOLDING_TAX_RULE, basis)?;

    let bracket = table
        .brackets
        .iter()
        .find(|bracket| bracket.up_to.is_none_or(|limit| basis <= limit))
        .ok_or_else(|| EngineError::InvalidConfig {
            message: format!("no withholding tax bracket covers a basis of {}", basis),
        })?;

    Ok(bracket.base_tax + (basis - bracket.excess_over) * bracket.rate)
}

/// Scales a weekly basis by four and computes the monthly tax.
pub fn calculate_withholding_tax_from_weekly(
    weekly_basis: Decimal,
    table: &WithholdingTaxTable,
) -> EngineResult<Decimal> {
    let monthly = monthly_from_weekly(WITHHOLDING_TAX_RULE, weekly_basis)?;
    calculate_withholding_tax(monthly, table)
}
