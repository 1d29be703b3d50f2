//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod employee;
mod pay_period;
mod punch;

pub use breakdown::{
    AllowanceBreakdown, AuditStep, AuditTrace, AuditWarning, DeductionBreakdown, PayrollBreakdown,
};
pub use employee::EmployeeRateProfile;
pub use pay_period::{PayPeriod, PeriodTotals};
pub use punch::{AttendanceFact, PunchRecord};
