//! Configuration types for the payroll rule set.
//!
//! This module contains the strongly-typed rule tables that are deserialized
//! from YAML configuration files. Each table's `Default` is the statutory
//! table the engine ships with, so a [`RuleSet::default()`] needs no files.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata identifying a rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetMetadata {
    /// Short code of the rule set (e.g., "ph_2024").
    pub code: String,
    /// The human-readable name of the rule set.
    pub name: String,
    /// The version of the tables.
    pub version: String,
    /// The date from which the tables apply.
    pub effective_date: NaiveDate,
}

impl Default for RuleSetMetadata {
    fn default() -> Self {
        Self {
            code: "ph_2024".to_string(),
            name: "Philippine statutory contributions and withholding tax".to_string(),
            version: "2024-01-01".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        }
    }
}

/// Attendance rules applied when turning punches into facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendancePolicy {
    /// Nominal shift start.
    pub shift_start: NaiveTime,
    /// Latest arrival that is not late. Arrivals strictly after it are late.
    pub grace_period: NaiveTime,
    /// Hours per punch counted as regular; the rest is overtime.
    pub regular_hours_cap: Decimal,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            shift_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
            grace_period: NaiveTime::from_hms_opt(8, 10, 0).unwrap_or_default(),
            regular_hours_cap: Decimal::new(8, 0),
        }
    }
}

impl AttendancePolicy {
    fn validate(&self) -> EngineResult<()> {
        if self.grace_period < self.shift_start {
            return Err(invalid("attendance grace period is before the shift start"));
        }
        if self.regular_hours_cap <= Decimal::ZERO {
            return Err(invalid("attendance regular_hours_cap must be positive"));
        }
        Ok(())
    }
}

/// One band of the social security table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionBracket {
    /// Exclusive upper bound of the band.
    pub below: Decimal,
    /// Employee share for a basis inside the band.
    pub employee_share: Decimal,
}

/// Retirement/social fund step table.
///
/// Bands are half-open and tested in order with a strict `<` against
/// [`ContributionBracket::below`]; a basis at or above the last bound gets
/// [`SocialSecurityTable::maximum`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSecurityTable {
    /// Bands in ascending order of `below`.
    pub brackets: Vec<ContributionBracket>,
    /// Share for a basis at or above the last band.
    pub maximum: Decimal,
}

impl SocialSecurityTable {
    /// Builds a table of `bands` equally wide bands.
    ///
    /// The first band ends (exclusive) at `first_below` and pays
    /// `first_share`; each following band is `band_width` wider and pays
    /// `increment` more.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::SocialSecurityTable;
    /// use rust_decimal::Decimal;
    ///
    /// let table = SocialSecurityTable::stepped(
    ///     Decimal::new(3250, 0),
    ///     Decimal::new(500, 0),
    ///     Decimal::new(13500, 2),
    ///     Decimal::new(2250, 2),
    ///     44,
    ///     Decimal::new(112500, 2),
    /// );
    /// assert_eq!(table, SocialSecurityTable::default());
    /// ```
    pub fn stepped(
        first_below: Decimal,
        band_width: Decimal,
        first_share: Decimal,
        increment: Decimal,
        bands: u32,
        maximum: Decimal,
    ) -> Self {
        let brackets = (0..bands)
            .map(|i| {
                let i = Decimal::from(i);
                ContributionBracket {
                    below: first_below + band_width * i,
                    employee_share: first_share + increment * i,
                }
            })
            .collect();
        Self { brackets, maximum }
    }

    fn validate(&self) -> EngineResult<()> {
        if self.brackets.is_empty() {
            return Err(invalid("social security table has no brackets"));
        }
        if self.brackets.windows(2).any(|w| w[0].below >= w[1].below) {
            return Err(invalid(
                "social security brackets must be strictly ascending",
            ));
        }
        if self.maximum < Decimal::ZERO
            || self
                .brackets
                .iter()
                .any(|b| b.employee_share < Decimal::ZERO)
        {
            return Err(invalid("social security shares must not be negative"));
        }
        Ok(())
    }
}

impl Default for SocialSecurityTable {
    /// "< 3250 → 135.00" rising 22.50 per 500-wide band up to
    /// "< 24750 → 1102.50", then 1125.00.
    fn default() -> Self {
        Self::stepped(
            Decimal::new(3250, 0),
            Decimal::new(500, 0),
            Decimal::new(13500, 2),
            Decimal::new(2250, 2),
            44,
            Decimal::new(112500, 2),
        )
    }
}

/// Health fund contribution rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthInsuranceRule {
    /// A basis at or below this pays `minimum`.
    pub minimum_threshold: Decimal,
    /// Floor contribution.
    pub minimum: Decimal,
    /// A basis above this pays `maximum`.
    pub maximum_threshold: Decimal,
    /// Ceiling contribution.
    pub maximum: Decimal,
    /// Premium rate applied between the thresholds.
    pub rate: Decimal,
    /// The premium is split this many ways; the employee pays one part.
    pub share_divisor: Decimal,
}

impl HealthInsuranceRule {
    fn validate(&self) -> EngineResult<()> {
        if self.minimum_threshold > self.maximum_threshold {
            return Err(invalid(
                "health insurance minimum_threshold is above maximum_threshold",
            ));
        }
        if self.share_divisor <= Decimal::ZERO {
            return Err(invalid("health insurance share_divisor must be positive"));
        }
        if self.rate < Decimal::ZERO || self.minimum < Decimal::ZERO || self.maximum < Decimal::ZERO
        {
            return Err(invalid("health insurance amounts must not be negative"));
        }
        Ok(())
    }
}

impl Default for HealthInsuranceRule {
    fn default() -> Self {
        Self {
            minimum_threshold: Decimal::new(10000, 0),
            minimum: Decimal::new(30000, 2),
            maximum_threshold: Decimal::new(5999999, 2),
            maximum: Decimal::new(90000, 2),
            rate: Decimal::new(3, 2),
            share_divisor: Decimal::new(2, 0),
        }
    }
}

/// Housing fund contribution rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousingFundRule {
    /// Below this no contribution is due.
    pub lower_threshold: Decimal,
    /// Up to and including this the lower rate applies; above it the upper rate.
    pub upper_threshold: Decimal,
    /// Rate for a basis in `[lower_threshold, upper_threshold]`.
    pub lower_rate: Decimal,
    /// Rate for a basis above `upper_threshold`.
    pub upper_rate: Decimal,
    /// Cap applied to the contribution whichever rate produced it.
    pub maximum: Decimal,
}

impl HousingFundRule {
    fn validate(&self) -> EngineResult<()> {
        if self.lower_threshold > self.upper_threshold {
            return Err(invalid(
                "housing fund lower_threshold is above upper_threshold",
            ));
        }
        if self.lower_rate < Decimal::ZERO
            || self.upper_rate < Decimal::ZERO
            || self.maximum < Decimal::ZERO
        {
            return Err(invalid("housing fund rates must not be negative"));
        }
        Ok(())
    }
}

impl Default for HousingFundRule {
    fn default() -> Self {
        Self {
            lower_threshold: Decimal::new(1000, 0),
            upper_threshold: Decimal::new(1500, 0),
            lower_rate: Decimal::new(1, 2),
            upper_rate: Decimal::new(2, 2),
            maximum: Decimal::new(10000, 2),
        }
    }
}

/// One bracket of the withholding tax table.
///
/// Tax for a basis in the bracket is `base_tax + (basis - excess_over) * rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive upper bound; `None` for the open top bracket.
    #[serde(default)]
    pub up_to: Option<Decimal>,
    /// Fixed tax due at the bottom of the bracket.
    pub base_tax: Decimal,
    /// The amount the marginal rate is applied above.
    pub excess_over: Decimal,
    /// Marginal rate.
    pub rate: Decimal,
}

/// Progressive withholding tax table on a monthly basis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithholdingTaxTable {
    /// Brackets in ascending order; only the last may be open.
    pub brackets: Vec<TaxBracket>,
}

impl WithholdingTaxTable {
    fn validate(&self) -> EngineResult<()> {
        let Some((last, bounded)) = self.brackets.split_last() else {
            return Err(invalid("withholding tax table has no brackets"));
        };
        if last.up_to.is_some() {
            return Err(invalid("the last withholding tax bracket must be open"));
        }
        let mut previous: Option<Decimal> = None;
        for bracket in bounded {
            let Some(up_to) = bracket.up_to else {
                return Err(invalid("only the last withholding tax bracket may be open"));
            };
            if previous.is_some_and(|p| p >= up_to) {
                return Err(invalid(
                    "withholding tax brackets must be strictly ascending",
                ));
            }
            previous = Some(up_to);
        }
        if self
            .brackets
            .iter()
            .any(|b| b.rate < Decimal::ZERO || b.base_tax < Decimal::ZERO)
        {
            return Err(invalid("withholding tax rates must not be negative"));
        }
        Ok(())
    }
}

impl Default for WithholdingTaxTable {
    fn default() -> Self {
        let bracket = |up_to: Option<i64>, base_tax: Decimal, excess_over: i64, rate: i64| {
            TaxBracket {
                up_to: up_to.map(Decimal::from),
                base_tax,
                excess_over: Decimal::from(excess_over),
                rate: Decimal::new(rate, 2),
            }
        };
        Self {
            brackets: vec![
                bracket(Some(20832), Decimal::ZERO, 0, 0),
                bracket(Some(33333), Decimal::ZERO, 20833, 20),
                bracket(Some(66667), Decimal::new(2500, 0), 33333, 25),
                bracket(Some(166667), Decimal::new(10833, 0), 66667, 30),
                bracket(Some(666667), Decimal::new(4083333, 2), 166667, 32),
                bracket(None, Decimal::new(20083333, 2), 666667, 35),
            ],
        }
    }
}

/// The complete set of rules one payroll computation is run under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Identifying metadata.
    pub metadata: RuleSetMetadata,
    /// Punch-to-fact rules.
    pub attendance: AttendancePolicy,
    /// Retirement/social fund table.
    pub social_security: SocialSecurityTable,
    /// Health fund rule.
    pub health_insurance: HealthInsuranceRule,
    /// Housing fund rule.
    pub housing_fund: HousingFundRule,
    /// Withholding tax table.
    pub withholding_tax: WithholdingTaxTable,
}

impl RuleSet {
    /// Checks every table for ordering and sign consistency.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> EngineResult<()> {
        self.attendance.validate()?;
        self.social_security.validate()?;
        self.health_insurance.validate()?;
        self.housing_fund.validate()?;
        self.withholding_tax.validate()?;
        Ok(())
    }
}

fn invalid(message: &str) -> EngineError {
    EngineError::InvalidConfig {
        message: message.to_string(),
    }
}
