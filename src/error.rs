//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing a payroll breakdown.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rule_set.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rule_set.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A punch record had its time-out before its time-in.
    #[error(
        "Malformed time range for employee '{employee_id}' on {date}: time-out {time_out} is before time-in {time_in}"
    )]
    MalformedTimeRange {
        /// The employee the punch belongs to.
        employee_id: String,
        /// The date of the punch.
        date: NaiveDate,
        /// The recorded time-in.
        time_in: NaiveTime,
        /// The recorded time-out.
        time_out: NaiveTime,
    },

    /// A date range had its start after its end.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// A deduction calculator received a basis it cannot apply a rule to.
    #[error("Invalid basis for {rule}: {message}")]
    InvalidBasis {
        /// The rule that rejected the basis (e.g., "housing_fund").
        rule: String,
        /// A description of what made the basis invalid.
        message: String,
    },

    /// An employee rate profile was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but describes an unusable rule table.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
