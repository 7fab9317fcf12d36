use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::metrics::calculator::WorkingCapitalMetrics;
use crate::metrics::inputs::FinancialInputs;
use crate::types::{safe_div, Days, Money, Rate, DAYS_IN_YEAR};

/// Projected operating working capital for one forecast year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearProjection {
    /// 1-based year offset from the base year
    pub year: u32,
    pub revenue: Money,
    pub cogs: Money,
    pub receivables: Money,
    pub inventory: Money,
    pub payables: Money,
    /// Receivables + inventory - payables
    pub working_capital: Money,
    /// Increase over the prior year (year 1 compares against the base balances)
    pub change_in_working_capital: Money,
}

/// Project operating working capital forward by compounding revenue and COGS.
///
/// DSO, DIO and DPO are held at their base values for the whole horizon:
/// the projection assumes no change in operating efficiency, so balances
/// move only with volume. Amounts beyond Decimal range saturate; the
/// envelope rejects growth paths that would get there.
pub fn forecast(
    base: &FinancialInputs,
    metrics: &WorkingCapitalMetrics,
    growth_rate: Rate,
    horizon_years: u32,
) -> Vec<YearProjection> {
    forecast_with(base, metrics, growth_rate, horizon_years, DAYS_IN_YEAR)
}

pub fn forecast_with(
    base: &FinancialInputs,
    metrics: &WorkingCapitalMetrics,
    growth_rate: Rate,
    horizon_years: u32,
    days_in_year: Days,
) -> Vec<YearProjection> {
    let growth = Decimal::ONE.saturating_add(growth_rate);
    let mut rows = Vec::with_capacity(horizon_years as usize);

    let mut revenue = base.revenue;
    let mut cogs = base.cogs;
    let mut prior_wc = base
        .receivables
        .saturating_add(base.inventory)
        .saturating_sub(base.payables);

    for year in 1..=horizon_years {
        revenue = revenue.saturating_mul(growth);
        cogs = cogs.saturating_mul(growth);

        let receivables = safe_div(metrics.dso, days_in_year).saturating_mul(revenue);
        let inventory = safe_div(metrics.dio, days_in_year).saturating_mul(cogs);
        let payables = safe_div(metrics.dpo, days_in_year).saturating_mul(cogs);
        let working_capital = receivables.saturating_add(inventory).saturating_sub(payables);

        rows.push(YearProjection {
            year,
            revenue,
            cogs,
            receivables,
            inventory,
            payables,
            working_capital,
            change_in_working_capital: working_capital.saturating_sub(prior_wc),
        });
        prior_wc = working_capital;
    }

    rows
}
