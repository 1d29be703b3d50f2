//! Employee rate profile model.
//!
//! This module defines the [`EmployeeRateProfile`], the slice of an employee
//! record the payroll computation needs: the hourly rate and the three fixed
//! monthly allowances.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The pay inputs for one employee, supplied by the employee directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRateProfile {
    /// The employee number.
    pub employee_id: String,
    /// Pay per regular hour worked.
    pub hourly_rate: Decimal,
    /// Fixed monthly rice subsidy.
    pub rice_subsidy: Decimal,
    /// Fixed monthly phone allowance.
    pub phone_allowance: Decimal,
    /// Fixed monthly clothing allowance.
    pub clothing_allowance: Decimal,
}

impl EmployeeRateProfile {
    /// Returns the sum of the three fixed allowances.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] when the sum does not fit in a
    /// decimal.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::EmployeeRateProfile;
    /// use rust_decimal::Decimal;
    ///
    /// let profile = EmployeeRateProfile {
    ///     employee_id: "10001".to_string(),
    ///     hourly_rate: Decimal::new(100, 0),
    ///     rice_subsidy: Decimal::new(1500, 0),
    ///     phone_allowance: Decimal::new(1000, 0),
    ///     clothing_allowance: Decimal::new(1000, 0),
    /// };
    /// assert_eq!(profile.total_allowances().unwrap(), Decimal::new(3500, 0));
    /// ```
    pub fn total_allowances(&self) -> EngineResult<Decimal> {
        self.rice_subsidy
            .checked_add(self.phone_allowance)
            .and_then(|sum| sum.checked_add(self.clothing_allowance))
            .ok_or_else(|| EngineError::InvalidEmployee {
                field: "allowances".to_string(),
                message: format!(
                    "total of {} + {} + {} is too large",
                    self.rice_subsidy, self.phone_allowance, self.clothing_allowance
                ),
            })
    }

    /// Checks that no monetary field is negative.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] naming the first negative field.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("hourly_rate", self.hourly_rate),
            ("rice_subsidy", self.rice_subsidy),
            ("phone_allowance", self.phone_allowance),
            ("clothing_allowance", self.clothing_allowance),
        ];

        match fields.iter().find(|(_, value)| *value < Decimal::ZERO) {
            Some((field, value)) => Err(EngineError::InvalidEmployee {
                field: field.to_string(),
                message: format!("must not be negative, got {}", value),
            }),
            None => Ok(()),
        }
    }
}
