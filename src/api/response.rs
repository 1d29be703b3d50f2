//! Response types for the Payroll Engine API.
//!
//! This module defines the success payload for `/breakdown`, the error
//! response structures, and the mapping from [`EngineError`] to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::RuleSetMetadata;
use crate::error::EngineError;
use crate::models::{AttendanceFact, PayrollBreakdown};

/// Successful response body for the `/breakdown` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The employee the breakdown is for.
    pub employee_id: String,
    /// The rule set the deductions were computed with.
    pub rule_set: RuleSetMetadata,
    /// The attendance facts that fell inside the period, in date order.
    pub attendance: Vec<AttendanceFact>,
    /// The gross-to-net breakdown.
    pub breakdown: PayrollBreakdown,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Wraps an error body in a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::MalformedTimeRange { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "MALFORMED_TIME_RANGE",
                    message,
                    "Overnight shifts are not supported; each punch must clock out on the day it clocks in",
                ),
            ),
            EngineError::InvalidRange { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_RANGE",
                    message,
                    "The period start date must not be after its end date",
                ),
            ),
            EngineError::InvalidBasis { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_BASIS", message))
            }
            EngineError::InvalidEmployee { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    message,
                    "The employee data contains invalid information",
                ),
            ),
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}
