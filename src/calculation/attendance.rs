//! Attendance fact building.
//!
//! This module turns a raw [`PunchRecord`] into an [`AttendanceFact`]: regular
//! hours capped at the daily limit, overtime beyond it, the late-arrival flag
//! and the ISO week number.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::config::AttendancePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceFact, PunchRecord};

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Derives the attendance fact for one punch.
///
/// Elapsed time is whole minutes between time-in and time-out on the same
/// day. Regular hours are capped at `policy.regular_hours_cap`; anything above
/// the cap is overtime. An arrival strictly after `policy.grace_period` is late.
///
/// # Errors
///
/// Returns [`EngineError::MalformedTimeRange`] when the time-out is before the
/// time-in. Overnight shifts are not modeled.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::build_fact;
/// use payroll_engine::config::AttendancePolicy;
/// use payroll_engine::models::PunchRecord;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let punch = PunchRecord {
///     employee_id: "10001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     time_in: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     time_out: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
/// };
///
/// let fact = build_fact(&punch, &AttendancePolicy::default()).unwrap();
/// assert_eq!(fact.hours_worked, Decimal::new(80, 1));
/// assert_eq!(fact.overtime_hours, Decimal::new(15, 1));
/// assert!(!fact.is_late);
/// ```
pub fn build_fact(punch: &PunchRecord, policy: &AttendancePolicy) -> EngineResult<AttendanceFact> {
    if punch.time_out < punch.time_in {
        return Err(EngineError::MalformedTimeRange {
            employee_id: punch.employee_id.clone(),
            date: punch.date,
            time_in: punch.time_in,
            time_out: punch.time_out,
        });
    }

    let elapsed_hours = Decimal::from(punch.elapsed_minutes()) / MINUTES_PER_HOUR;
    let hours_worked = elapsed_hours.min(policy.regular_hours_cap);
    let overtime_hours = (elapsed_hours - policy.regular_hours_cap).max(Decimal::ZERO);

    Ok(AttendanceFact {
        employee_id: punch.employee_id.clone(),
        date: punch.date,
        time_in: punch.time_in,
        time_out: punch.time_out,
        hours_worked,
        overtime_hours,
        is_late: punch.time_in > policy.grace_period,
        week_number: punch.date.iso_week().week(),
    })
}

/// Derives one fact per punch, failing on the first malformed punch.
pub fn build_facts(
    punches: &[PunchRecord],
    policy: &AttendancePolicy,
) -> EngineResult<Vec<AttendanceFact>> {
    punches
        .iter()
        .map(|punch| build_fact(punch, policy))
        .collect()
}
