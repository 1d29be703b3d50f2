//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a payroll
//! rule set from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{
    AttendancePolicy, HealthInsuranceRule, HousingFundRule, RuleSet, RuleSetMetadata,
    SocialSecurityTable, WithholdingTaxTable,
};

/// Loads and provides access to a payroll rule set.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates the tables, and hands out the resulting [`RuleSet`].
///
/// # Directory Structure
///
/// ```text
/// config/ph_2024/
/// ├── rule_set.yaml          # Rule set metadata
/// ├── attendance.yaml        # Grace period and regular-hours cap
/// ├── social_security.yaml   # Retirement/social fund step table
/// ├── health_insurance.yaml  # Health fund rule
/// ├── housing_fund.yaml      # Housing fund rule
/// └── withholding_tax.yaml   # Withholding tax brackets
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ph_2024").unwrap();
/// println!("Loaded rule set: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: RuleSet,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if any required file is missing
    /// - [`EngineError::ConfigParseError`] if any file contains invalid YAML
    ///   or misses a required field
    /// - [`EngineError::InvalidConfig`] if a table is out of order or negative
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<RuleSetMetadata>(&path.join("rule_set.yaml"))?;
        let attendance = Self::load_yaml::<AttendancePolicy>(&path.join("attendance.yaml"))?;
        let social_security =
            Self::load_yaml::<SocialSecurityTable>(&path.join("social_security.yaml"))?;
        let health_insurance =
            Self::load_yaml::<HealthInsuranceRule>(&path.join("health_insurance.yaml"))?;
        let housing_fund = Self::load_yaml::<HousingFundRule>(&path.join("housing_fund.yaml"))?;
        let withholding_tax =
            Self::load_yaml::<WithholdingTaxTable>(&path.join("withholding_tax.yaml"))?;

        let rules = RuleSet {
            metadata,
            attendance,
            social_security,
            health_insurance,
            housing_fund,
            withholding_tax,
        };

        let loader = Self::from_rule_set(rules)?;
        info!(
            code = %loader.metadata().code,
            version = %loader.metadata().version,
            path = %path.display(),
            "Loaded payroll rule set"
        );
        Ok(loader)
    }

    /// Wraps an in-memory rule set after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if the rule set is inconsistent.
    pub fn from_rule_set(rules: RuleSet) -> EngineResult<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Returns a loader holding the built-in statutory rule set.
    pub fn builtin() -> Self {
        Self {
            rules: RuleSet::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &RuleSetMetadata {
        &self.rules.metadata
    }
}
