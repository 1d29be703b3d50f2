//! Basis validation and weekly-to-monthly scaling shared by the statutory
//! deduction calculators.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::error::{EngineError, EngineResult};

/// Weeks per month used to scale a weekly basis to a monthly one.
///
/// A flat four-week month, not a calendar-accurate conversion. The statutory
/// tables are applied to exactly this approximation.
pub const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Rejects a negative basis.
pub(crate) fn ensure_valid_basis(rule: &str, basis: Decimal) -> EngineResult<()> {
    if basis < Decimal::ZERO {
        return Err(EngineError::InvalidBasis {
            rule: rule.to_string(),
            message: format!("basis must not be negative, got {}", basis),
        });
    }
    Ok(())
}

/// Scales a weekly basis to the monthly basis the tables are defined on.
pub(crate) fn monthly_from_weekly(rule: &str, weekly: Decimal) -> EngineResult<Decimal> {
    ensure_valid_basis(rule, weekly)?;
    weekly
        .checked_mul(WEEKS_PER_MONTH)
        .ok_or_else(|| EngineError::InvalidBasis {
            rule: rule.to_string(),
            message: format!("weekly basis {} is too large to scale to a month", weekly),
        })
}

/// Converts a floating-point amount from a collaborator into a basis.
///
/// # Errors
///
/// Returns [`EngineError::InvalidBasis`] for NaN, infinities, values outside
/// the decimal range, and negative amounts.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::basis_from_f64;
/// use rust_decimal::Decimal;
///
/// assert_eq!(basis_from_f64("housing_fund", 1501.0).unwrap(), Decimal::new(1501, 0));
/// assert!(basis_from_f64("housing_fund", f64::NAN).is_err());
/// ```
pub fn basis_from_f64(rule: &str, value: f64) -> EngineResult<Decimal> {
    if !value.is_finite() {
        return Err(EngineError::InvalidBasis {
            rule: rule.to_string(),
            message: format!("basis must be finite, got {}", value),
        });
    }
    let basis = Decimal::from_f64(value).ok_or_else(|| EngineError::InvalidBasis {
        rule: rule.to_string(),
        message: format!("basis {} is outside the decimal range", value),
    })?;
    ensure_valid_basis(rule, basis)?;
    Ok(basis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_weeks_per_month_is_four() {
        assert_eq!(WEEKS_PER_MONTH, dec("4"));
    }

    #[test]
    fn test_zero_basis_is_valid() {
        assert!(ensure_valid_basis("test", Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_negative_basis_is_invalid() {
        match ensure_valid_basis("test", dec("-0.01")) {
            Err(EngineError::InvalidBasis { rule, message }) => {
                assert_eq!(rule, "test");
                assert!(message.contains("-0.01"));
            }
            other => panic!("Expected InvalidBasis, got {:?}", other),
        }
    }

    #[test]
    fn test_monthly_from_weekly_multiplies_by_four() {
        assert_eq!(monthly_from_weekly("test", dec("4000")).unwrap(), dec("16000"));
        assert_eq!(monthly_from_weekly("test", dec("375.25")).unwrap(), dec("1501"));
    }

    #[test]
    fn test_monthly_from_weekly_rejects_overflow() {
        assert!(matches!(
            monthly_from_weekly("test", Decimal::MAX),
            Err(EngineError::InvalidBasis { .. })
        ));
    }

    #[test]
    fn test_basis_from_f64_rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                basis_from_f64("test", value),
                Err(EngineError::InvalidBasis { .. })
            ));
        }
    }

    #[test]
    fn test_basis_from_f64_rejects_negative() {
        assert!(matches!(
            basis_from_f64("test", -1.0),
            Err(EngineError::InvalidBasis { .. })
        ));
    }

    #[test]
    fn test_basis_from_f64_keeps_short_decimals() {
        assert_eq!(basis_from_f64("test", 59999.99).unwrap(), dec("59999.99"));
    }
}
