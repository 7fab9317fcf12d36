use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::WorkingCapitalError;
use crate::types::{Days, Multiple, Rate, DAYS_IN_YEAR, DEFAULT_CASH_FLOW_MARGIN};
use crate::WorkingCapitalResult;

/// Longest accepted day basis (a leap year).
const MAX_DAYS_IN_YEAR: Days = dec!(366);
const MAX_SCENARIO_MULTIPLIER: Multiple = dec!(10);

/// Multipliers applied to the base cycle days to build a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMultipliers {
    pub dso: Multiple,
    pub dio: Multiple,
    pub dpo: Multiple,
}

impl ScenarioMultipliers {
    /// Faster collections, leaner stock, longer supplier credit.
    pub fn best_case() -> Self {
        Self {
            dso: dec!(0.80),
            dio: dec!(0.85),
            dpo: dec!(1.10),
        }
    }

    pub fn worst_case() -> Self {
        Self {
            dso: dec!(1.20),
            dio: dec!(1.20),
            dpo: dec!(0.90),
        }
    }

    pub fn identity() -> Self {
        Self {
            dso: Decimal::ONE,
            dio: Decimal::ONE,
            dpo: Decimal::ONE,
        }
    }
}

/// Constants the projection engine bakes into its currency conversions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineAssumptions {
    /// Day basis for DSO/DIO/DPO and day-to-currency conversions
    pub days_in_year: Days,
    /// Operating cash-flow margin used to turn CCC-day changes into cash
    pub cash_flow_margin: Rate,
    pub best_case: ScenarioMultipliers,
    pub worst_case: ScenarioMultipliers,
}

impl Default for EngineAssumptions {
    fn default() -> Self {
        Self {
            days_in_year: DAYS_IN_YEAR,
            cash_flow_margin: DEFAULT_CASH_FLOW_MARGIN,
            best_case: ScenarioMultipliers::best_case(),
            worst_case: ScenarioMultipliers::worst_case(),
        }
    }
}

impl EngineAssumptions {
    /// Reject assumptions that would make every day conversion meaningless.
    pub fn validate(&self) -> WorkingCapitalResult<()> {
        if self.days_in_year < Decimal::ONE || self.days_in_year > MAX_DAYS_IN_YEAR {
            return Err(WorkingCapitalError::InvalidInput {
                field: "days_in_year".into(),
                reason: format!(
                    "Day basis must be between 1 and {MAX_DAYS_IN_YEAR}, got {}",
                    self.days_in_year
                ),
            });
        }
        if self.cash_flow_margin < Decimal::ZERO || self.cash_flow_margin > Decimal::ONE {
            return Err(WorkingCapitalError::InvalidInput {
                field: "cash_flow_margin".into(),
                reason: "Cash-flow margin must be between 0 and 1".into(),
            });
        }
        for (name, m) in [("best_case", &self.best_case), ("worst_case", &self.worst_case)] {
            let in_range = |x: Multiple| x >= Decimal::ZERO && x <= MAX_SCENARIO_MULTIPLIER;
            if !(in_range(m.dso) && in_range(m.dio) && in_range(m.dpo)) {
                return Err(WorkingCapitalError::InvalidInput {
                    field: name.into(),
                    reason: format!(
                        "Scenario multipliers must be between 0 and {MAX_SCENARIO_MULTIPLIER}"
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Covenant limits from a credit agreement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CovenantThresholds {
    /// Current ratio must not fall below this
    pub min_current_ratio: Multiple,
    /// CCC must not exceed this many days
    pub max_ccc_days: Days,
    /// DSCR must not fall below this
    pub dscr_min: Multiple,
}

impl Default for CovenantThresholds {
    fn default() -> Self {
        Self {
            min_current_ratio: dec!(1.2),
            max_ccc_days: dec!(90),
            dscr_min: dec!(1.25),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_assumptions_match_reference_constants() {
        let a = EngineAssumptions::default();
        assert_eq!(a.days_in_year, dec!(365));
        assert_eq!(a.cash_flow_margin, dec!(0.08));
        assert_eq!(a.best_case.dso, dec!(0.80));
        assert_eq!(a.worst_case.dpo, dec!(0.90));
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_zero_day_basis_rejected() {
        let a = EngineAssumptions {
            days_in_year: Decimal::ZERO,
            ..Default::default()
        };
        assert!(matches!(
            a.validate(),
            Err(WorkingCapitalError::InvalidInput { field, .. }) if field == "days_in_year"
        ));
    }

    #[test]
    fn test_day_basis_beyond_leap_year_rejected() {
        let a = EngineAssumptions {
            days_in_year: dec!(1_000_000_000),
            ..Default::default()
        };
        assert!(a.validate().is_err());

        let banking = EngineAssumptions {
            days_in_year: dec!(360),
            ..Default::default()
        };
        assert!(banking.validate().is_ok());
    }

    #[test]
    fn test_oversized_multiplier_rejected() {
        let a = EngineAssumptions {
            worst_case: ScenarioMultipliers {
                dso: dec!(1000),
                ..ScenarioMultipliers::worst_case()
            },
            ..Default::default()
        };
        assert!(matches!(
            a.validate(),
            Err(WorkingCapitalError::InvalidInput { field, .. }) if field == "worst_case"
        ));
    }

    #[test]
    fn test_partial_assumptions_deserialize_with_defaults() {
        let a: EngineAssumptions =
            serde_json::from_str(r#"{ "cash_flow_margin": "0.1" }"#).unwrap();
        assert_eq!(a.cash_flow_margin, dec!(0.1));
        assert_eq!(a.days_in_year, dec!(365));
    }
}
