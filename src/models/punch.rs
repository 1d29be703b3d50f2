//! Punch record and attendance fact models.
//!
//! A [`PunchRecord`] is the raw time-in/time-out pair handed over by the
//! attendance source. An [`AttendanceFact`] is what the fact builder derives
//! from exactly one punch.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One recorded time-in/time-out pair for an employee on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchRecord {
    /// The employee number the punch belongs to.
    pub employee_id: String,
    /// The calendar date of the punch.
    pub date: NaiveDate,
    /// The recorded arrival time.
    pub time_in: NaiveTime,
    /// The recorded departure time.
    pub time_out: NaiveTime,
}

impl PunchRecord {
    /// Returns the signed number of whole minutes between time-in and time-out.
    ///
    /// The duration is taken within the same day, so a time-out earlier than
    /// the time-in produces a negative value. Seconds are truncated.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::PunchRecord;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let punch = PunchRecord {
    ///     employee_id: "10001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
    ///     time_in: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
    ///     time_out: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
    /// };
    /// assert_eq!(punch.elapsed_minutes(), 570);
    /// ```
    pub fn elapsed_minutes(&self) -> i64 {
        (self.time_out - self.time_in).num_minutes()
    }
}

/// The facts derived from a single punch record.
///
/// Created once per punch by
/// [`build_fact`](crate::calculation::build_fact) and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceFact {
    /// The employee number the punch belongs to.
    pub employee_id: String,
    /// The calendar date of the punch.
    pub date: NaiveDate,
    /// The recorded arrival time.
    pub time_in: NaiveTime,
    /// The recorded departure time.
    pub time_out: NaiveTime,
    /// Regular hours worked, capped at the daily regular-hours limit.
    pub hours_worked: Decimal,
    /// Hours worked beyond the daily regular-hours limit.
    pub overtime_hours: Decimal,
    /// Whether the arrival was strictly after the grace period.
    pub is_late: bool,
    /// ISO week of the week-based year the punch date falls in.
    pub week_number: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn make_punch(time_in: &str, time_out: &str) -> PunchRecord {
        PunchRecord {
            employee_id: "10001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            time_in: make_time(time_in),
            time_out: make_time(time_out),
        }
    }

    #[test]
    fn test_elapsed_minutes_regular_day() {
        assert_eq!(make_punch("08:00", "17:00").elapsed_minutes(), 540);
    }

    #[test]
    fn test_elapsed_minutes_zero_duration() {
        assert_eq!(make_punch("09:00", "09:00").elapsed_minutes(), 0);
    }

    #[test]
    fn test_elapsed_minutes_reversed_is_negative() {
        assert_eq!(make_punch("17:00", "08:00").elapsed_minutes(), -540);
    }

    #[test]
    fn test_elapsed_minutes_truncates_seconds() {
        let punch = PunchRecord {
            employee_id: "10001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            time_in: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            time_out: NaiveTime::from_hms_opt(8, 1, 59).unwrap(),
        };
        assert_eq!(punch.elapsed_minutes(), 1);
    }

    #[test]
    fn test_punch_deserialization() {
        let json = r#"{
            "employee_id": "10001",
            "date": "2024-06-03",
            "time_in": "08:05:00",
            "time_out": "17:00:00"
        }"#;

        let punch: PunchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(punch.employee_id, "10001");
        assert_eq!(punch.time_in, make_time("08:05"));
        assert_eq!(punch.time_out, make_time("17:00"));
    }

    #[test]
    fn test_attendance_fact_serialization() {
        let fact = AttendanceFact {
            employee_id: "10001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            time_in: make_time("08:00"),
            time_out: make_time("17:30"),
            hours_worked: Decimal::new(80, 1),
            overtime_hours: Decimal::new(15, 1),
            is_late: false,
            week_number: 23,
        };

        let json = serde_json::to_string(&fact).unwrap();
        assert!(json.contains("\"hours_worked\":\"8.0\""));
        assert!(json.contains("\"overtime_hours\":\"1.5\""));
        assert!(json.contains("\"is_late\":false"));
        assert!(json.contains("\"week_number\":23"));
    }
}
