//! Calculation logic for the Payroll Engine.
//!
//! This module contains the payroll pipeline: building attendance facts from
//! punches, aggregating facts over a pay period, the four statutory deduction
//! calculators (social security, health insurance, housing fund and
//! withholding tax), and the composer that turns period totals into a
//! gross-to-net breakdown.

mod aggregation;
mod attendance;
mod basis;
mod composer;
mod health_insurance;
mod housing_fund;
mod social_security;
mod withholding_tax;

pub use aggregation::{aggregate, aggregate_period};
pub use attendance::{build_fact, build_facts};
pub use basis::{WEEKS_PER_MONTH, basis_from_f64};
pub use composer::{BASIC_PAY_RULE, GROSS_PAY_RULE, compute_breakdown};
pub use health_insurance::{
    HEALTH_INSURANCE_RULE, calculate_health_insurance, calculate_health_insurance_from_weekly,
};
pub use housing_fund::{
    HOUSING_FUND_RULE, calculate_housing_fund, calculate_housing_fund_from_weekly,
};
pub use social_security::{
    SOCIAL_SECURITY_RULE, calculate_social_security, calculate_social_security_from_weekly,
};
pub use withholding_tax::{
    WITHHOLDING_TAX_RULE, calculate_withholding_tax, calculate_withholding_tax_from_weekly,
};
