use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::assumptions::EngineAssumptions;
use crate::error::WorkingCapitalError;
use crate::types::{safe_div, Days, Money};
use crate::WorkingCapitalResult;

/// Most points a single sweep axis may expand to.
pub const MAX_SWEEP_POINTS: usize = 201;

/// Largest day reduction (either sign) a sweep may reach.
pub const MAX_SWEEP_DAYS: Decimal = dec!(3650);

/// Inclusive sweep of day reductions, e.g. -10..=10 step 5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRange {
    pub min: Days,
    pub max: Days,
    pub step: Days,
}

impl Default for DayRange {
    fn default() -> Self {
        Self {
            min: dec!(-10),
            max: dec!(10),
            step: dec!(5),
        }
    }
}

impl DayRange {
    /// Expand into the sweep values, appending `max` when the step overshoots it.
    pub fn values(&self) -> WorkingCapitalResult<Vec<Days>> {
        if self.step <= Decimal::ZERO {
            return Err(WorkingCapitalError::InvalidInput {
                field: "step".into(),
                reason: "Step must be positive".into(),
            });
        }
        if self.min > self.max {
            return Err(WorkingCapitalError::InvalidInput {
                field: "min".into(),
                reason: "Min must be <= max".into(),
            });
        }

        if self.min.abs() > MAX_SWEEP_DAYS || self.max.abs() > MAX_SWEEP_DAYS {
            return Err(WorkingCapitalError::InvalidInput {
                field: "range".into(),
                reason: format!("Sweep bounds must lie within ±{MAX_SWEEP_DAYS} days"),
            });
        }
        // Whole steps between the bounds, plus the start and a possible appended max
        let steps = (self.max - self.min)
            .checked_div(self.step)
            .map(|n| n.floor())
            .and_then(|n| n.to_usize());
        match steps {
            Some(n) if n + 2 <= MAX_SWEEP_POINTS => {}
            _ => {
                return Err(WorkingCapitalError::InvalidInput {
                    field: "step".into(),
                    reason: format!(
                        "Sweep would exceed {MAX_SWEEP_POINTS} points; use a larger step"
                    ),
                })
            }
        }

        let mut values = Vec::new();
        let mut current = self.min;
        while current <= self.max {
            values.push(current);
            current += self.step;
        }
        if let Some(&last) = values.last() {
            if last < self.max {
                values.push(self.max);
            }
        }
        Ok(values)
    }
}

/// Cash impact of every (DSO delta, DIO delta) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityGrid {
    pub base_ccc: Days,
    pub dso_deltas: Vec<Days>,
    pub dio_deltas: Vec<Days>,
    /// cash_impact[i][j] for dso_deltas[i], dio_deltas[j]
    pub cash_impact: Vec<Vec<Money>>,
    /// base CCC less both reductions
    pub resulting_ccc: Vec<Vec<Days>>,
}

impl SensitivityGrid {
    /// Cash impact at an exact pair of deltas, if both are on the grid.
    pub fn lookup(&self, dso_delta: Days, dio_delta: Days) -> Option<Money> {
        let i = self.dso_deltas.iter().position(|d| *d == dso_delta)?;
        let j = self.dio_deltas.iter().position(|d| *d == dio_delta)?;
        Some(self.cash_impact[i][j])
    }
}

/// Linear sensitivity of cash to DSO and DIO day reductions. No cross terms:
/// `cash_impact = (dso_delta + dio_delta) / days * revenue * margin`.
pub fn sensitivity_grid(
    base_ccc: Days,
    revenue: Money,
    dso_range: &[Days],
    dio_range: &[Days],
    assumptions: &EngineAssumptions,
) -> SensitivityGrid {
    let mut cash_impact = Vec::with_capacity(dso_range.len());
    let mut resulting_ccc = Vec::with_capacity(dso_range.len());
    for dso_delta in dso_range {
        cash_impact.push(
            dio_range
                .iter()
                .map(|dio_delta| {
                    safe_div(dso_delta.saturating_add(*dio_delta), assumptions.days_in_year)
                        .saturating_mul(revenue)
                        .saturating_mul(assumptions.cash_flow_margin)
                })
                .collect(),
        );
        resulting_ccc.push(
            dio_range
                .iter()
                .map(|dio_delta| base_ccc.saturating_sub(*dso_delta).saturating_sub(*dio_delta))
                .collect(),
        );
    }

    SensitivityGrid {
        base_ccc,
        dso_deltas: dso_range.to_vec(),
        dio_deltas: dio_range.to_vec(),
        cash_impact,
        resulting_ccc,
    }
}
