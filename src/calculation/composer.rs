//! Gross-to-net payroll composition.
//!
//! This module provides [`compute_breakdown`], which combines period totals,
//! the employee's rate profile and the statutory rule set into a
//! [`PayrollBreakdown`] with a full audit trace.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RuleSet;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AllowanceBreakdown, AuditStep, AuditTrace, DeductionBreakdown, EmployeeRateProfile,
    PayrollBreakdown, PeriodTotals,
};

use super::basis::WEEKS_PER_MONTH;
use super::health_insurance::{HEALTH_INSURANCE_RULE, calculate_health_insurance_from_weekly};
use super::housing_fund::{HOUSING_FUND_RULE, calculate_housing_fund_from_weekly};
use super::social_security::{SOCIAL_SECURITY_RULE, calculate_social_security_from_weekly};
use super::withholding_tax::{WITHHOLDING_TAX_RULE, calculate_withholding_tax};

/// Rule identifier for the basic pay step.
pub const BASIC_PAY_RULE: &str = "basic_gross_pay";

/// Rule identifier for the gross pay step.
pub const GROSS_PAY_RULE: &str = "gross_pay";

/// Computes the gross-to-net breakdown for one employee and period.
///
/// Basic pay is regular hours times the hourly rate; overtime hours are
/// reported but not paid. Social security, health insurance and the housing
/// fund run on the weekly basis (basic pay divided by four) through their
/// weekly variants; withholding tax runs on basic pay directly. Net pay is
/// gross pay (basic plus allowances) less the four deductions.
///
/// # Errors
///
/// - [`EngineError::InvalidEmployee`] if the profile has a negative amount or
///   its allowances overflow
/// - [`EngineError::InvalidBasis`] if basic or gross pay cannot be represented
/// - [`EngineError::InvalidConfig`] if the tax table does not cover basic pay
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_breakdown;
/// use payroll_engine::config::RuleSet;
/// use payroll_engine::models::{EmployeeRateProfile, PayPeriod, PeriodTotals};
/// use rust_decimal::Decimal;
///
/// let totals = PeriodTotals {
///     period: PayPeriod::for_month(2024, 6).unwrap(),
///     total_hours_worked: Decimal::new(160, 0),
///     total_overtime_hours: Decimal::new(10, 0),
///     days_worked: 20,
///     late_arrivals: 0,
/// };
/// let profile = EmployeeRateProfile {
///     employee_id: "10001".to_string(),
///     hourly_rate: Decimal::new(100, 0),
///     rice_subsidy: Decimal::new(1500, 0),
///     phone_allowance: Decimal::new(1000, 0),
///     clothing_allowance: Decimal::new(1000, 0),
/// };
///
/// let breakdown = compute_breakdown(&totals, &profile, &RuleSet::default()).unwrap();
/// assert_eq!(breakdown.gross_pay, Decimal::new(19500, 0));
/// assert_eq!(breakdown.net_pay, Decimal::new(18440, 0));
/// ```
pub fn compute_breakdown(
    totals: &PeriodTotals,
    profile: &EmployeeRateProfile,
    rules: &RuleSet,
) -> EngineResult<PayrollBreakdown> {
    profile.validate()?;

    let mut steps = Vec::with_capacity(8);

    let basic_gross_pay = totals
        .total_hours_worked
        .checked_mul(profile.hourly_rate)
        .ok_or_else(|| EngineError::InvalidBasis {
            rule: BASIC_PAY_RULE.to_string(),
            message: format!(
                "{} hours at {} per hour is too large",
                totals.total_hours_worked, profile.hourly_rate
            ),
        })?;
    steps.push(AuditStep {
        step_number: 1,
        rule_id: BASIC_PAY_RULE.to_string(),
        rule_name: "Basic Gross Pay".to_string(),
        input: serde_json::json!({
            "total_hours_worked": totals.total_hours_worked.to_string(),
            "total_overtime_hours": totals.total_overtime_hours.to_string(),
            "hourly_rate": profile.hourly_rate.to_string()
        }),
        output: serde_json::json!({
            "basic_gross_pay": basic_gross_pay.to_string()
        }),
        reasoning: format!(
            "{} hours × ${} = ${} (overtime {} hours reported, not paid)",
            totals.total_hours_worked.normalize(),
            profile.hourly_rate.normalize(),
            basic_gross_pay.normalize(),
            totals.total_overtime_hours.normalize()
        ),
    });

    let allowances = AllowanceBreakdown {
        rice_subsidy: profile.rice_subsidy,
        phone_allowance: profile.phone_allowance,
        clothing_allowance: profile.clothing_allowance,
        total: profile.total_allowances()?,
    };
    steps.push(AuditStep {
        step_number: 2,
        rule_id: "allowances".to_string(),
        rule_name: "Fixed Allowances".to_string(),
        input: serde_json::json!({
            "rice_subsidy": allowances.rice_subsidy.to_string(),
            "phone_allowance": allowances.phone_allowance.to_string(),
            "clothing_allowance": allowances.clothing_allowance.to_string()
        }),
        output: serde_json::json!({
            "total": allowances.total.to_string()
        }),
        reasoning: format!(
            "${} + ${} + ${} = ${}",
            allowances.rice_subsidy.normalize(),
            allowances.phone_allowance.normalize(),
            allowances.clothing_allowance.normalize(),
            allowances.total.normalize()
        ),
    });

    let gross_pay = basic_gross_pay
        .checked_add(allowances.total)
        .ok_or_else(|| EngineError::InvalidBasis {
            rule: GROSS_PAY_RULE.to_string(),
            message: format!(
                "basic pay {} plus allowances {} is too large",
                basic_gross_pay, allowances.total
            ),
        })?;
    steps.push(AuditStep {
        step_number: 3,
        rule_id: GROSS_PAY_RULE.to_string(),
        rule_name: "Gross Pay".to_string(),
        input: serde_json::json!({
            "basic_gross_pay": basic_gross_pay.to_string(),
            "total_allowances": allowances.total.to_string()
        }),
        output: serde_json::json!({
            "gross_pay": gross_pay.to_string()
        }),
        reasoning: format!(
            "${} basic + ${} allowances = ${}",
            basic_gross_pay.normalize(),
            allowances.total.normalize(),
            gross_pay.normalize()
        ),
    });

    let weekly_basis = basic_gross_pay / WEEKS_PER_MONTH;

    let social_security =
        calculate_social_security_from_weekly(weekly_basis, &rules.social_security)?;
    steps.push(weekly_deduction_step(
        4,
        SOCIAL_SECURITY_RULE,
        "Social Security Contribution",
        weekly_basis,
        social_security,
    ));

    let health_insurance =
        calculate_health_insurance_from_weekly(weekly_basis, &rules.health_insurance)?;
    steps.push(weekly_deduction_step(
        5,
        HEALTH_INSURANCE_RULE,
        "Health Insurance Contribution",
        weekly_basis,
        health_insurance,
    ));

    let housing_fund = calculate_housing_fund_from_weekly(weekly_basis, &rules.housing_fund)?;
    steps.push(weekly_deduction_step(
        6,
        HOUSING_FUND_RULE,
        "Housing Fund Contribution",
        weekly_basis,
        housing_fund,
    ));

    let withholding_tax = calculate_withholding_tax(basic_gross_pay, &rules.withholding_tax)?;
    steps.push(AuditStep {
        step_number: 7,
        rule_id: WITHHOLDING_TAX_RULE.to_string(),
        rule_name: "Withholding Tax".to_string(),
        input: serde_json::json!({
            "monthly_basis": basic_gross_pay.to_string()
        }),
        output: serde_json::json!({
            "amount": withholding_tax.to_string()
        }),
        reasoning: format!(
            "Tax bracket applied to monthly basis ${} = ${}",
            basic_gross_pay.normalize(),
            withholding_tax.normalize()
        ),
    });

    let deductions = DeductionBreakdown {
        social_security,
        health_insurance,
        housing_fund,
        withholding_tax,
        total: social_security + health_insurance + housing_fund + withholding_tax,
    };

    let net_pay = gross_pay - deductions.total;
    steps.push(AuditStep {
        step_number: 8,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.to_string(),
            "total_deductions": deductions.total.to_string()
        }),
        output: serde_json::json!({
            "net_pay": net_pay.to_string()
        }),
        reasoning: format!(
            "${} gross - ${} deductions = ${}",
            gross_pay.normalize(),
            deductions.total.normalize(),
            net_pay.normalize()
        ),
    });

    debug!(
        employee_id = %profile.employee_id,
        basic_gross_pay = %basic_gross_pay,
        gross_pay = %gross_pay,
        total_deductions = %deductions.total,
        net_pay = %net_pay,
        "Computed payroll breakdown"
    );

    Ok(PayrollBreakdown {
        employee_id: profile.employee_id.clone(),
        period_start: totals.period.start_date,
        period_end: totals.period.end_date,
        total_hours_worked: totals.total_hours_worked,
        total_overtime_hours: totals.total_overtime_hours,
        hourly_rate: profile.hourly_rate,
        basic_gross_pay,
        allowances,
        gross_pay,
        deductions,
        net_pay,
        audit_trace: AuditTrace {
            steps,
            warnings: vec![],
        },
    })
}

fn weekly_deduction_step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    weekly_basis: Decimal,
    amount: Decimal,
) -> AuditStep {
    let monthly_basis = weekly_basis * WEEKS_PER_MONTH;
    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input: serde_json::json!({
            "weekly_basis": weekly_basis.to_string(),
            "monthly_basis": monthly_basis.to_string()
        }),
        output: serde_json::json!({
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "Weekly basis ${} × {} = monthly ${} → ${}",
            weekly_basis.normalize(),
            WEEKS_PER_MONTH,
            monthly_basis.normalize(),
            amount.normalize()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PayPeriod;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_totals(hours: &str, overtime: &str) -> PeriodTotals {
        PeriodTotals {
            period: PayPeriod::for_month(2024, 6).unwrap(),
            total_hours_worked: dec(hours),
            total_overtime_hours: dec(overtime),
            days_worked: 20,
            late_arrivals: 0,
        }
    }

    fn make_profile(rate: &str) -> EmployeeRateProfile {
        EmployeeRateProfile {
            employee_id: "10001".to_string(),
            hourly_rate: dec(rate),
            rice_subsidy: dec("1500"),
            phone_allowance: dec("1000"),
            clothing_allowance: dec("1000"),
        }
    }

    /// PC-001: full month at 100 per hour
    #[test]
    fn test_end_to_end_breakdown() {
        let breakdown =
            compute_breakdown(&make_totals("160", "10"), &make_profile("100"), &RuleSet::default())
                .unwrap();

        assert_eq!(breakdown.basic_gross_pay, dec("16000"));
        assert_eq!(breakdown.allowances.total, dec("3500"));
        assert_eq!(breakdown.gross_pay, dec("19500"));
        assert_eq!(breakdown.deductions.social_security, dec("720.00"));
        assert_eq!(breakdown.deductions.health_insurance, dec("240.00"));
        assert_eq!(breakdown.deductions.housing_fund, dec("100.00"));
        assert_eq!(breakdown.deductions.withholding_tax, Decimal::ZERO);
        assert_eq!(breakdown.deductions.total, dec("1060.00"));
        assert_eq!(breakdown.net_pay, dec("18440.00"));
        assert_eq!(breakdown.total_overtime_hours, dec("10"));
    }

    /// PC-002: overtime hours are not paid
    #[test]
    fn test_overtime_not_added_to_basic_pay() {
        let without = compute_breakdown(&make_totals("160", "0"), &make_profile("100"), &RuleSet::default())
            .unwrap();
        let with = compute_breakdown(&make_totals("160", "40"), &make_profile("100"), &RuleSet::default())
            .unwrap();
        assert_eq!(without.basic_gross_pay, with.basic_gross_pay);
        assert_eq!(without.net_pay, with.net_pay);
    }

    /// PC-003: tax runs on the monthly basis, not the weekly one
    #[test]
    fn test_withholding_tax_uses_monthly_basis() {
        // 250 hours × 100 = 25000 monthly; weekly basis 6250
        let breakdown =
            compute_breakdown(&make_totals("250", "0"), &make_profile("100"), &RuleSet::default())
                .unwrap();
        assert_eq!(breakdown.deductions.withholding_tax, dec("833.40"));
        assert_eq!(breakdown.deductions.social_security, dec("1125.00"));
        assert_eq!(breakdown.deductions.health_insurance, dec("375"));
    }

    /// PC-004: zero hours still pays allowances and minimum contributions
    #[test]
    fn test_zero_hours() {
        let breakdown =
            compute_breakdown(&make_totals("0", "0"), &make_profile("100"), &RuleSet::default())
                .unwrap();
        assert_eq!(breakdown.basic_gross_pay, Decimal::ZERO);
        assert_eq!(breakdown.gross_pay, dec("3500"));
        assert_eq!(breakdown.deductions.social_security, dec("135.00"));
        assert_eq!(breakdown.deductions.health_insurance, dec("300.00"));
        assert_eq!(breakdown.deductions.housing_fund, Decimal::ZERO);
        assert_eq!(breakdown.net_pay, dec("3065.00"));
    }

    #[test]
    fn test_negative_rate_is_invalid_employee() {
        match compute_breakdown(&make_totals("160", "0"), &make_profile("-1"), &RuleSet::default()) {
            Err(EngineError::InvalidEmployee { field, .. }) => assert_eq!(field, "hourly_rate"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_allowances_are_invalid_employee() {
        let mut profile = make_profile("100");
        profile.rice_subsidy = Decimal::MAX;
        profile.phone_allowance = Decimal::ONE;

        match compute_breakdown(&make_totals("160", "0"), &profile, &RuleSet::default()) {
            Err(EngineError::InvalidEmployee { field, .. }) => assert_eq!(field, "allowances"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_gross_pay_is_invalid_basis() {
        let mut profile = make_profile("0");
        profile.hourly_rate = Decimal::MAX;

        match compute_breakdown(&make_totals("1", "0"), &profile, &RuleSet::default()) {
            Err(EngineError::InvalidBasis { rule, .. }) => assert_eq!(rule, GROSS_PAY_RULE),
            other => panic!("Expected InvalidBasis, got {:?}", other),
        }
    }

    #[test]
    fn test_net_equals_gross_minus_deductions() {
        let breakdown =
            compute_breakdown(&make_totals("173.5", "3"), &make_profile("123.45"), &RuleSet::default())
                .unwrap();
        let d = &breakdown.deductions;
        assert_eq!(
            d.total,
            d.social_security + d.health_insurance + d.housing_fund + d.withholding_tax
        );
        assert_eq!(breakdown.net_pay, breakdown.gross_pay - d.total);
        assert_eq!(
            breakdown.gross_pay,
            breakdown.basic_gross_pay + breakdown.allowances.total
        );
    }

    #[test]
    fn test_audit_trace_records_every_step() {
        let breakdown =
            compute_breakdown(&make_totals("160", "10"), &make_profile("100"), &RuleSet::default())
                .unwrap();
        let steps = &breakdown.audit_trace.steps;

        assert_eq!(steps.len(), 8);
        let rule_ids: Vec<&str> = steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            rule_ids,
            vec![
                "basic_gross_pay",
                "allowances",
                "gross_pay",
                "social_security",
                "health_insurance",
                "housing_fund",
                "withholding_tax",
                "net_pay"
            ]
        );
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.step_number, i as u32 + 1);
        }
        assert_eq!(dec(steps[3].input["weekly_basis"].as_str().unwrap()), dec("4000"));
        assert!(breakdown.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_uses_supplied_rule_set() {
        let mut rules = RuleSet::default();
        rules.housing_fund.maximum = dec("50.00");
        let breakdown =
            compute_breakdown(&make_totals("160", "0"), &make_profile("100"), &rules).unwrap();
        assert_eq!(breakdown.deductions.housing_fund, dec("50.00"));
    }
}
