//! Payroll breakdown models for the Payroll Engine.
//!
//! This module contains the [`PayrollBreakdown`] type and its associated
//! structures that capture every figure of a gross-to-net computation,
//! together with the audit trace recording how each figure was reached.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The three fixed allowances paid on top of basic pay.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AllowanceBreakdown;
/// use rust_decimal::Decimal;
///
/// let allowances = AllowanceBreakdown {
///     rice_subsidy: Decimal::new(1500, 0),
///     phone_allowance: Decimal::new(1000, 0),
///     clothing_allowance: Decimal::new(1000, 0),
///     total: Decimal::new(3500, 0),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceBreakdown {
    /// Rice subsidy.
    pub rice_subsidy: Decimal,
    /// Phone allowance.
    pub phone_allowance: Decimal,
    /// Clothing allowance.
    pub clothing_allowance: Decimal,
    /// Sum of the three allowances.
    pub total: Decimal,
}

/// The four statutory deductions taken from gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// Retirement/social fund contribution (employee share).
    pub social_security: Decimal,
    /// Health fund contribution (employee share).
    pub health_insurance: Decimal,
    /// Housing fund contribution (employee share).
    pub housing_fund: Decimal,
    /// Withholding tax.
    pub withholding_tax: Decimal,
    /// Sum of the four deductions.
    pub total: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate conditions that don't prevent calculation
/// but may require attention, such as a period with no attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete gross-to-net result for one employee and one period.
///
/// Every field is a function of the period totals, the rate profile and the
/// rule set; computing it twice from the same inputs yields an equal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// The employee the breakdown is for.
    pub employee_id: String,
    /// First day of the period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the period (inclusive).
    pub period_end: NaiveDate,
    /// Regular hours worked in the period.
    pub total_hours_worked: Decimal,
    /// Overtime hours in the period. Reported only, not paid in basic pay.
    pub total_overtime_hours: Decimal,
    /// Pay per regular hour.
    pub hourly_rate: Decimal,
    /// Regular hours times hourly rate.
    pub basic_gross_pay: Decimal,
    /// Fixed allowances.
    pub allowances: AllowanceBreakdown,
    /// Basic gross pay plus allowances.
    pub gross_pay: Decimal,
    /// Statutory deductions.
    pub deductions: DeductionBreakdown,
    /// Gross pay minus total deductions.
    pub net_pay: Decimal,
    /// How each figure was reached.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_breakdown() -> PayrollBreakdown {
        PayrollBreakdown {
            employee_id: "10001".to_string(),
            period_start: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            total_hours_worked: dec("160"),
            total_overtime_hours: dec("10"),
            hourly_rate: dec("100"),
            basic_gross_pay: dec("16000"),
            allowances: AllowanceBreakdown {
                rice_subsidy: dec("1500"),
                phone_allowance: dec("1000"),
                clothing_allowance: dec("1000"),
                total: dec("3500"),
            },
            gross_pay: dec("19500"),
            deductions: DeductionBreakdown {
                social_security: dec("720.00"),
                health_insurance: dec("240.00"),
                housing_fund: dec("100.00"),
                withholding_tax: dec("0"),
                total: dec("1060.00"),
            },
            net_pay: dec("18440.00"),
            audit_trace: AuditTrace::default(),
        }
    }

    #[test]
    fn test_breakdown_serialization() {
        let json = serde_json::to_string(&create_sample_breakdown()).unwrap();
        assert!(json.contains("\"period_start\":\"2024-06-01\""));
        assert!(json.contains("\"basic_gross_pay\":\"16000\""));
        assert!(json.contains("\"net_pay\":\"18440.00\""));
        assert!(json.contains("\"allowances\":{"));
        assert!(json.contains("\"deductions\":{"));
        assert!(json.contains("\"audit_trace\":{"));
    }

    #[test]
    fn test_breakdown_deserialization() {
        let json = serde_json::to_string(&create_sample_breakdown()).unwrap();
        let breakdown: PayrollBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown, create_sample_breakdown());
    }

    #[test]
    fn test_sample_totals_are_consistent() {
        let breakdown = create_sample_breakdown();
        let d = &breakdown.deductions;
        assert_eq!(
            d.social_security + d.health_insurance + d.housing_fund + d.withholding_tax,
            d.total
        );
        assert_eq!(breakdown.gross_pay - d.total, breakdown.net_pay);
    }

    #[test]
    fn test_audit_warning_serialization() {
        let warning = AuditWarning {
            code: "NO_ATTENDANCE_RECORDS".to_string(),
            message: "No attendance records in period".to_string(),
            severity: "medium".to_string(),
        };

        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"NO_ATTENDANCE_RECORDS\""));
        assert!(json.contains("\"severity\":\"medium\""));
    }

    #[test]
    fn test_audit_steps_ordered() {
        let trace = AuditTrace {
            steps: (1..=3)
                .map(|n| AuditStep {
                    step_number: n,
                    rule_id: format!("rule_{:03}", n),
                    rule_name: "Step".to_string(),
                    input: serde_json::json!({}),
                    output: serde_json::json!({}),
                    reasoning: String::new(),
                })
                .collect(),
            warnings: vec![],
        };

        let step_numbers: Vec<u32> = trace.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(step_numbers, vec![1, 2, 3]);
    }
}
