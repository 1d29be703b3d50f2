//! HTTP API module for the Payroll Engine.
//!
//! This module provides the REST endpoint that computes a gross-to-net
//! payroll breakdown from an employee profile and raw punches.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BreakdownRequest, EmployeeRequest, PeriodRequest, PunchRequest};
pub use response::{ApiError, ApiErrorResponse, PayrollResponse};
pub use state::AppState;
