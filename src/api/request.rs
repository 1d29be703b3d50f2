//! Request types for the Payroll Engine API.
//!
//! This module defines the JSON request structures for the `/breakdown` endpoint.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EmployeeRateProfile, PayPeriod, PunchRecord};

use super::response::{ApiError, ApiErrorResponse};

/// Request body for the `/breakdown` endpoint.
///
/// Carries the employee's rate profile, the period to compute and the raw
/// punches from the attendance source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownRequest {
    /// The employee's pay inputs.
    pub employee: EmployeeRequest,
    /// The pay period to compute.
    pub period: PeriodRequest,
    /// Raw punches. Punches for other employees are ignored.
    #[serde(default)]
    pub punches: Vec<PunchRequest>,
}

/// Employee rate profile in a breakdown request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee number.
    pub id: String,
    /// Pay per regular hour worked.
    pub hourly_rate: Decimal,
    /// Fixed monthly rice subsidy.
    #[serde(default)]
    pub rice_subsidy: Decimal,
    /// Fixed monthly phone allowance.
    #[serde(default)]
    pub phone_allowance: Decimal,
    /// Fixed monthly clothing allowance.
    #[serde(default)]
    pub clothing_allowance: Decimal,
}

/// The period in a breakdown request: an explicit date range or a calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PeriodRequest {
    /// An inclusive date range.
    Range {
        /// The first day of the period.
        start_date: NaiveDate,
        /// The last day of the period.
        end_date: NaiveDate,
    },
    /// A whole calendar month.
    Month {
        /// The calendar year.
        year: i32,
        /// The month number, 1 to 12.
        month: u32,
    },
}

impl PeriodRequest {
    /// Resolves the request into a validated pay period.
    pub fn resolve(&self) -> Result<PayPeriod, ApiErrorResponse> {
        match *self {
            PeriodRequest::Range {
                start_date,
                end_date,
            } => Ok(PayPeriod::new(start_date, end_date)?),
            PeriodRequest::Month { year, month } => {
                PayPeriod::for_month(year, month).ok_or_else(|| {
                    ApiErrorResponse::bad_request(ApiError::validation_error(format!(
                        "Invalid month {}-{:02}: month must be between 1 and 12",
                        year, month
                    )))
                })
            }
        }
    }
}

/// One punch in a breakdown request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchRequest {
    /// The employee number the punch belongs to.
    pub employee_id: String,
    /// The calendar date of the punch.
    pub date: NaiveDate,
    /// Clock-in time.
    pub time_in: NaiveTime,
    /// Clock-out time.
    pub time_out: NaiveTime,
}

impl From<EmployeeRequest> for EmployeeRateProfile {
    fn from(req: EmployeeRequest) -> Self {
        EmployeeRateProfile {
            employee_id: req.id,
            hourly_rate: req.hourly_rate,
            rice_subsidy: req.rice_subsidy,
            phone_allowance: req.phone_allowance,
            clothing_allowance: req.clothing_allowance,
        }
    }
}

impl From<PunchRequest> for PunchRecord {
    fn from(req: PunchRequest) -> Self {
        PunchRecord {
            employee_id: req.employee_id,
            date: req.date,
            time_in: req.time_in,
            time_out: req.time_out,
        }
    }
}
