//! HTTP request handlers for the Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::{Datelike, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate_period, build_facts, compute_breakdown};
use crate::config::ConfigLoader;
use crate::error::EngineError;
use crate::models::{AuditWarning, EmployeeRateProfile, PayPeriod, PunchRecord};

use super::request::BreakdownRequest;
use super::response::{ApiError, ApiErrorResponse, PayrollResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/breakdown", post(breakdown_handler))
        .with_state(state)
}

/// Handler for POST /breakdown endpoint.
///
/// Accepts an employee profile, a period and raw punches, and returns the
/// attendance facts and payroll breakdown for the period.
async fn breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<BreakdownRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing breakdown request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let period = match request.period.resolve() {
        Ok(period) => period,
        Err(api_error) => {
            warn!(
                correlation_id = %correlation_id,
                code = %api_error.error.code,
                "Invalid pay period"
            );
            return api_error.into_response();
        }
    };

    let profile: EmployeeRateProfile = request.employee.into();
    let punches: Vec<PunchRecord> = request
        .punches
        .into_iter()
        .filter(|punch| punch.employee_id == profile.employee_id)
        .map(Into::into)
        .collect();

    let start_time = Instant::now();
    match perform_breakdown(&profile, &period, &punches, state.config()) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employee_id = %profile.employee_id,
                punches_count = punches.len(),
                net_pay = %result.breakdown.net_pay,
                duration_us = duration.as_micros(),
                "Breakdown completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %profile.employee_id,
                error = %err,
                "Breakdown failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Runs the punch-to-net pipeline for one employee and period.
///
/// Punches outside the period are dropped before facts are built, so a
/// malformed punch only fails the request when it falls inside the period.
fn perform_breakdown(
    profile: &EmployeeRateProfile,
    period: &PayPeriod,
    punches: &[PunchRecord],
    config: &ConfigLoader,
) -> Result<PayrollResponse, EngineError> {
    let rules = config.rules();

    let in_period: Vec<PunchRecord> = punches
        .iter()
        .filter(|punch| period.contains_date(punch.date))
        .cloned()
        .collect();
    let mut facts = build_facts(&in_period, &rules.attendance)?;
    facts.sort_by_key(|fact| (fact.date, fact.time_in));

    let totals = aggregate_period(&facts, period);
    let mut breakdown = compute_breakdown(&totals, profile, rules)?;

    if totals.days_worked == 0 {
        let year = period.start_date.year();
        let message = if punches.iter().any(|punch| punch.date.year() == year) {
            format!(
                "No attendance records for employee '{}' between {} and {}",
                profile.employee_id, period.start_date, period.end_date
            )
        } else {
            format!(
                "No attendance records for employee '{}' in {}",
                profile.employee_id, year
            )
        };
        breakdown.audit_trace.warnings.push(AuditWarning {
            code: "NO_ATTENDANCE_RECORDS".to_string(),
            message,
            severity: "medium".to_string(),
        });
    }
    if totals.late_arrivals > 0 {
        breakdown.audit_trace.warnings.push(AuditWarning {
            code: "LATE_ARRIVALS".to_string(),
            message: format!(
                "{} of {} days clocked in after {}",
                totals.late_arrivals, totals.days_worked, rules.attendance.grace_period
            ),
            severity: "low".to_string(),
        });
    }

    Ok(PayrollResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: profile.employee_id.clone(),
        rule_set: config.metadata().clone(),
        attendance: facts,
        breakdown,
    })
}
