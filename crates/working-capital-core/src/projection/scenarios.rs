use serde::{Deserialize, Serialize};

use crate::assumptions::{EngineAssumptions, ScenarioMultipliers};
use crate::metrics::calculator::WorkingCapitalMetrics;
use crate::types::{safe_div, Days, Money};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioLabel {
    Best,
    Base,
    Worst,
    Custom(String),
}

/// A named variant of the cycle days and its cash effect against the base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub label: ScenarioLabel,
    pub dso: Days,
    pub dio: Days,
    pub dpo: Days,
    pub ccc: Days,
    /// (base CCC - scenario CCC) / days * revenue * cash-flow margin.
    /// Positive means cash released relative to the base case.
    pub cash_impact: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    pub best: Scenario,
    pub base: Scenario,
    pub worst: Scenario,
}

impl ScenarioSet {
    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        [&self.best, &self.base, &self.worst].into_iter()
    }
}

/// Build best, base and worst cases from the configured multipliers.
pub fn scenario_analysis(
    metrics: &WorkingCapitalMetrics,
    revenue: Money,
    assumptions: &EngineAssumptions,
) -> ScenarioSet {
    ScenarioSet {
        best: apply(ScenarioLabel::Best, metrics, &assumptions.best_case, revenue, assumptions),
        base: apply(
            ScenarioLabel::Base,
            metrics,
            &ScenarioMultipliers::identity(),
            revenue,
            assumptions,
        ),
        worst: apply(ScenarioLabel::Worst, metrics, &assumptions.worst_case, revenue, assumptions),
    }
}

/// A user-defined scenario measured against the same base case.
pub fn custom_scenario(
    name: &str,
    metrics: &WorkingCapitalMetrics,
    multipliers: &ScenarioMultipliers,
    revenue: Money,
    assumptions: &EngineAssumptions,
) -> Scenario {
    apply(
        ScenarioLabel::Custom(name.to_string()),
        metrics,
        multipliers,
        revenue,
        assumptions,
    )
}

fn apply(
    label: ScenarioLabel,
    metrics: &WorkingCapitalMetrics,
    multipliers: &ScenarioMultipliers,
    revenue: Money,
    assumptions: &EngineAssumptions,
) -> Scenario {
    let dso = metrics.dso.saturating_mul(multipliers.dso);
    let dio = metrics.dio.saturating_mul(multipliers.dio);
    let dpo = metrics.dpo.saturating_mul(multipliers.dpo);
    let ccc = dso.saturating_add(dio).saturating_sub(dpo);
    let cash_impact = safe_div(metrics.ccc.saturating_sub(ccc), assumptions.days_in_year)
        .saturating_mul(revenue)
        .saturating_mul(assumptions.cash_flow_margin);

    Scenario {
        label,
        dso,
        dio,
        dpo,
        ccc,
        cash_impact,
    }
}
