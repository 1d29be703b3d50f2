//! Configuration loading and management for the Payroll Engine.
//!
//! This module provides the statutory rule tables and attendance policy a
//! payroll computation runs under, either built in or loaded from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ph_2024").unwrap();
//! println!("Loaded rule set: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AttendancePolicy, ContributionBracket, HealthInsuranceRule, HousingFundRule, RuleSet,
    RuleSetMetadata, SocialSecurityTable, TaxBracket, WithholdingTaxTable,
};
