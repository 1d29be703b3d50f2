//! Pay period and period totals models.
//!
//! This module contains the [`PayPeriod`] type that bounds an aggregation and
//! the [`PeriodTotals`] produced by aggregating attendance facts over it.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive date range a payroll breakdown is computed for.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
/// )
/// .unwrap();
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Creates a pay period, rejecting a start date after the end date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`] when `start_date > end_date`.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if start_date > end_date {
            return Err(EngineError::InvalidRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Returns the period covering a whole calendar month.
    ///
    /// Returns `None` when `month` is not in `1..=12` or the year is out of
    /// the representable range.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let february = PayPeriod::for_month(2024, 2).unwrap();
    /// assert_eq!(february.end_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    /// ```
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        let start_date = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let end_date = next_month.pred_opt()?;
        debug_assert_eq!(end_date.month(), month);
        Some(Self {
            start_date,
            end_date,
        })
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Worked-hour totals for one employee over a pay period.
///
/// Zero totals are a valid result; whether they mean "no data" or "worked no
/// hours" is for the caller to decide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// The period the totals were aggregated over.
    pub period: PayPeriod,
    /// Sum of regular hours worked.
    pub total_hours_worked: Decimal,
    /// Sum of overtime hours.
    pub total_overtime_hours: Decimal,
    /// Number of attendance facts that fell inside the period.
    pub days_worked: u32,
    /// Number of in-period facts flagged as late.
    pub late_arrivals: u32,
}

impl PeriodTotals {
    /// Returns zero totals for the given period.
    pub fn empty(period: PayPeriod) -> Self {
        Self {
            period,
            total_hours_worked: Decimal::ZERO,
            total_overtime_hours: Decimal::ZERO,
            days_worked: 0,
            late_arrivals: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// PP-001: contains_date within period
    #[test]
    fn test_contains_date_within_period() {
        let period = PayPeriod::new(make_date("2024-06-01"), make_date("2024-06-30")).unwrap();
        assert!(period.contains_date(make_date("2024-06-15")));
    }

    /// PP-002: contains_date outside period
    #[test]
    fn test_contains_date_outside_period() {
        let period = PayPeriod::new(make_date("2024-06-01"), make_date("2024-06-30")).unwrap();
        assert!(!period.contains_date(make_date("2024-07-01")));
        assert!(!period.contains_date(make_date("2024-05-31")));
    }

    #[test]
    fn test_contains_date_on_boundaries() {
        let period = PayPeriod::new(make_date("2024-06-01"), make_date("2024-06-30")).unwrap();
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
    }

    #[test]
    fn test_single_day_period_is_valid() {
        let period = PayPeriod::new(make_date("2024-06-03"), make_date("2024-06-03")).unwrap();
        assert!(period.contains_date(make_date("2024-06-03")));
    }

    #[test]
    fn test_reversed_period_is_invalid_range() {
        let result = PayPeriod::new(make_date("2024-06-30"), make_date("2024-06-01"));
        match result {
            Err(EngineError::InvalidRange { start, end }) => {
                assert_eq!(start, make_date("2024-06-30"));
                assert_eq!(end, make_date("2024-06-01"));
            }
            other => panic!("Expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn test_for_month_regular_month() {
        let period = PayPeriod::for_month(2024, 6).unwrap();
        assert_eq!(period.start_date, make_date("2024-06-01"));
        assert_eq!(period.end_date, make_date("2024-06-30"));
    }

    #[test]
    fn test_for_month_leap_february() {
        let period = PayPeriod::for_month(2024, 2).unwrap();
        assert_eq!(period.end_date, make_date("2024-02-29"));

        let period = PayPeriod::for_month(2023, 2).unwrap();
        assert_eq!(period.end_date, make_date("2023-02-28"));
    }

    #[test]
    fn test_for_month_december_rolls_year() {
        let period = PayPeriod::for_month(2024, 12).unwrap();
        assert_eq!(period.start_date, make_date("2024-12-01"));
        assert_eq!(period.end_date, make_date("2024-12-31"));
    }

    #[test]
    fn test_for_month_rejects_invalid_month() {
        assert!(PayPeriod::for_month(2024, 0).is_none());
        assert!(PayPeriod::for_month(2024, 13).is_none());
    }

    #[test]
    fn test_empty_totals_are_zero() {
        let period = PayPeriod::for_month(2024, 6).unwrap();
        let totals = PeriodTotals::empty(period);
        assert_eq!(totals.total_hours_worked, Decimal::ZERO);
        assert_eq!(totals.total_overtime_hours, Decimal::ZERO);
        assert_eq!(totals.days_worked, 0);
        assert_eq!(totals.late_arrivals, 0);
    }

    #[test]
    fn test_serialize_pay_period() {
        let period = PayPeriod::for_month(2024, 6).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"start_date\":\"2024-06-01\""));
        assert!(json.contains("\"end_date\":\"2024-06-30\""));
    }
}
