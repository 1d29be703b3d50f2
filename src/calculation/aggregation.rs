//! Period aggregation of attendance facts.

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{AttendanceFact, PayPeriod, PeriodTotals};

/// Sums worked and overtime hours for the facts dated within `[start, end]`.
///
/// Facts may arrive in any order. No facts in range yields zero totals.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidRange`] when `start > end`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::aggregate;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let totals = aggregate(
///     &[],
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(totals.total_hours_worked, Decimal::ZERO);
/// ```
pub fn aggregate(
    facts: &[AttendanceFact],
    start: NaiveDate,
    end: NaiveDate,
) -> EngineResult<PeriodTotals> {
    let period = PayPeriod::new(start, end)?;
    Ok(aggregate_period(facts, &period))
}

/// Sums the facts dated within an already-validated period.
pub fn aggregate_period(facts: &[AttendanceFact], period: &PayPeriod) -> PeriodTotals {
    facts
        .iter()
        .filter(|fact| period.contains_date(fact.date))
        .fold(PeriodTotals::empty(*period), |mut totals, fact| {
            totals.total_hours_worked += fact.hours_worked;
            totals.total_overtime_hours += fact.overtime_hours;
            totals.days_worked += 1;
            if fact.is_late {
                totals.late_arrivals += 1;
            }
            totals
        })
}
