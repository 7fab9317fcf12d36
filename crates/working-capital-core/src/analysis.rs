use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::advisory::insights::{self, Insight};
use crate::assumptions::{CovenantThresholds, EngineAssumptions};
use crate::error::WorkingCapitalError;
use crate::metrics::calculator::{
    self, BalanceSheetSummary, CccBand, CccComponent, WorkingCapitalMetrics,
};
use crate::metrics::inputs::FinancialInputs;
use crate::projection::cash_release::{self, CashReleaseSimulation};
use crate::projection::covenants::{self, CovenantResult, DscrBreakdown, StressTestRow};
use crate::projection::forecast::{self, YearProjection};
use crate::projection::scenarios::{self, ScenarioSet};
use crate::projection::sensitivity::{self, DayRange, SensitivityGrid};
use crate::types::{with_metadata, ComputationOutput, Days, Money, Rate};
use crate::WorkingCapitalResult;

const MAX_HORIZON_YEARS: u32 = 50;
/// Cycle days beyond a century mean the flows are negligible against the balances.
const MAX_CYCLE_DAYS: Decimal = dec!(36_500);
/// Ceiling on compounded forecast revenue and COGS.
const MAX_PROJECTED_AMOUNT: Decimal = dec!(1_000_000_000_000_000_000_000_000);
const MAX_REVENUE_SHOCK: Decimal = dec!(1);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// Everything a dashboard needs to run the full analysis in one call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingCapitalInput {
    #[serde(default)]
    pub financials: FinancialInputs,
    /// Annual revenue and COGS growth for the forecast
    #[serde(default = "default_growth_rate")]
    pub growth_rate: Rate,
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,
    /// Days of CCC reduction for the cash release simulation
    #[serde(default = "default_reduce_ccc_days")]
    pub reduce_ccc_days: Days,
    #[serde(default)]
    pub dso_range: DayRange,
    #[serde(default)]
    pub dio_range: DayRange,
    #[serde(default)]
    pub assumptions: EngineAssumptions,
    #[serde(default)]
    pub covenants: CovenantThresholds,
}

impl Default for WorkingCapitalInput {
    fn default() -> Self {
        Self {
            financials: FinancialInputs::default(),
            growth_rate: default_growth_rate(),
            horizon_years: default_horizon_years(),
            reduce_ccc_days: default_reduce_ccc_days(),
            dso_range: DayRange::default(),
            dio_range: DayRange::default(),
            assumptions: EngineAssumptions::default(),
            covenants: CovenantThresholds::default(),
        }
    }
}

fn default_growth_rate() -> Rate {
    dec!(0.10)
}

fn default_horizon_years() -> u32 {
    5
}

fn default_reduce_ccc_days() -> Days {
    dec!(10)
}

/// Full working capital report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingCapitalReport {
    pub balance_sheet: BalanceSheetSummary,
    pub metrics: WorkingCapitalMetrics,
    pub ccc_decomposition: Vec<CccComponent>,
    pub ccc_band: CccBand,
    pub forecast: Vec<YearProjection>,
    pub scenarios: ScenarioSet,
    pub sensitivity: SensitivityGrid,
    pub dscr: DscrBreakdown,
    pub covenants: Vec<CovenantResult>,
    pub cash_release: CashReleaseSimulation,
    pub insights: Vec<Insight>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsReport {
    pub balance_sheet: BalanceSheetSummary,
    pub metrics: WorkingCapitalMetrics,
    pub ccc_decomposition: Vec<CccComponent>,
    pub ccc_band: CccBand,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CovenantReport {
    pub dscr: DscrBreakdown,
    pub results: Vec<CovenantResult>,
    pub all_passing: bool,
}

// ---------------------------------------------------------------------------
// Public API: full analysis
// ---------------------------------------------------------------------------

/// Validate the inputs, then run every engine stage and assemble one report.
pub fn analyze_working_capital(
    input: &WorkingCapitalInput,
) -> WorkingCapitalResult<ComputationOutput<WorkingCapitalReport>> {
    let start = Instant::now();

    // -- Validation ----------------------------------------------------------
    validate_input(input)?;
    let fin = &input.financials;
    let a = &input.assumptions;

    // -- Metrics ---------------------------------------------------------------
    let metrics = calculator::compute_metrics_with(fin, a.days_in_year);
    check_cycle_days(&metrics)?;
    let mut warnings = metric_warnings(fin, &metrics);

    // -- Projections -----------------------------------------------------------
    let forecast =
        forecast::forecast_with(fin, &metrics, input.growth_rate, input.horizon_years, a.days_in_year);
    let scenarios = scenarios::scenario_analysis(&metrics, fin.revenue, a);
    let sensitivity = sensitivity::sensitivity_grid(
        metrics.ccc,
        fin.revenue,
        &input.dso_range.values()?,
        &input.dio_range.values()?,
        a,
    );

    // -- Covenants -------------------------------------------------------------
    let dscr = covenants::compute_dscr(fin);
    if !fin.has_debt_service_data() {
        warnings.push(
            "Debt service fields incomplete; missing values treated as zero for DSCR.".into(),
        );
    }
    let covenants = covenants::covenant_check(
        &metrics,
        input.covenants.min_current_ratio,
        input.covenants.max_ccc_days,
        dscr.dscr,
        input.covenants.dscr_min,
    );

    // -- Advisory --------------------------------------------------------------
    let cash_release =
        cash_release::simulate_cash_release(input.reduce_ccc_days, fin.revenue, a.days_in_year);
    let insights = insights::generate_insights(&metrics, Some(scenarios.best.cash_impact));

    let report = WorkingCapitalReport {
        balance_sheet: calculator::balance_sheet_summary(fin),
        ccc_decomposition: calculator::ccc_decomposition(&metrics),
        ccc_band: calculator::classify_ccc(metrics.ccc),
        metrics,
        forecast,
        scenarios,
        sensitivity,
        dscr,
        covenants,
        cash_release,
        insights,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Working Capital Analysis (Liquidity, CCC, Forecast, Scenarios, Covenants)",
        input,
        warnings,
        elapsed,
        report,
    ))
}

// ---------------------------------------------------------------------------
// Public API: single stages
// ---------------------------------------------------------------------------

pub fn run_metrics(
    fin: &FinancialInputs,
    assumptions: &EngineAssumptions,
) -> WorkingCapitalResult<ComputationOutput<MetricsReport>> {
    let start = Instant::now();
    fin.validate()?;
    assumptions.validate()?;

    let metrics = calculator::compute_metrics_with(fin, assumptions.days_in_year);
    check_cycle_days(&metrics)?;
    let warnings = metric_warnings(fin, &metrics);
    let report = MetricsReport {
        balance_sheet: calculator::balance_sheet_summary(fin),
        ccc_decomposition: calculator::ccc_decomposition(&metrics),
        ccc_band: calculator::classify_ccc(metrics.ccc),
        metrics,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Working Capital Metrics (Liquidity Ratios, DSO/DIO/DPO/CCC)",
        fin,
        warnings,
        elapsed,
        report,
    ))
}

pub fn run_forecast(
    fin: &FinancialInputs,
    growth_rate: Rate,
    horizon_years: u32,
    assumptions: &EngineAssumptions,
) -> WorkingCapitalResult<ComputationOutput<Vec<YearProjection>>> {
    let start = Instant::now();
    fin.validate()?;
    assumptions.validate()?;
    validate_horizon(growth_rate, horizon_years)?;
    validate_growth_path(fin, growth_rate, horizon_years)?;

    let metrics = calculator::compute_metrics_with(fin, assumptions.days_in_year);
    check_cycle_days(&metrics)?;
    let rows = forecast::forecast_with(
        fin,
        &metrics,
        growth_rate,
        horizon_years,
        assumptions.days_in_year,
    );

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Working Capital Forecast (constant DSO/DIO/DPO)",
        &serde_json::json!({
            "growth_rate": growth_rate,
            "horizon_years": horizon_years,
            "days_in_year": assumptions.days_in_year,
            "cycle_days_held_constant": true,
        }),
        metric_warnings(fin, &metrics),
        elapsed,
        rows,
    ))
}

pub fn run_scenarios(
    fin: &FinancialInputs,
    assumptions: &EngineAssumptions,
) -> WorkingCapitalResult<ComputationOutput<ScenarioSet>> {
    let start = Instant::now();
    fin.validate()?;
    assumptions.validate()?;

    let metrics = calculator::compute_metrics_with(fin, assumptions.days_in_year);
    check_cycle_days(&metrics)?;
    let set = scenarios::scenario_analysis(&metrics, fin.revenue, assumptions);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Best / Base / Worst CCC Scenarios",
        assumptions,
        metric_warnings(fin, &metrics),
        elapsed,
        set,
    ))
}

pub fn run_sensitivity(
    fin: &FinancialInputs,
    dso_range: &DayRange,
    dio_range: &DayRange,
    assumptions: &EngineAssumptions,
) -> WorkingCapitalResult<ComputationOutput<SensitivityGrid>> {
    let start = Instant::now();
    fin.validate()?;
    assumptions.validate()?;

    let metrics = calculator::compute_metrics_with(fin, assumptions.days_in_year);
    check_cycle_days(&metrics)?;
    let grid = sensitivity::sensitivity_grid(
        metrics.ccc,
        fin.revenue,
        &dso_range.values()?,
        &dio_range.values()?,
        assumptions,
    );

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "DSO x DIO Cash Sensitivity (linear)",
        &serde_json::json!({
            "dso_range": dso_range,
            "dio_range": dio_range,
            "cash_flow_margin": assumptions.cash_flow_margin,
        }),
        Vec::new(),
        elapsed,
        grid,
    ))
}

pub fn run_covenants(
    fin: &FinancialInputs,
    thresholds: &CovenantThresholds,
    assumptions: &EngineAssumptions,
) -> WorkingCapitalResult<ComputationOutput<CovenantReport>> {
    let start = Instant::now();
    fin.validate()?;
    assumptions.validate()?;

    let metrics = calculator::compute_metrics_with(fin, assumptions.days_in_year);
    check_cycle_days(&metrics)?;
    let dscr = covenants::compute_dscr(fin);
    let mut warnings = metric_warnings(fin, &metrics);
    if !fin.has_debt_service_data() {
        warnings.push(
            "Debt service fields incomplete; missing values treated as zero for DSCR.".into(),
        );
    }
    let results = covenants::covenant_check(
        &metrics,
        thresholds.min_current_ratio,
        thresholds.max_ccc_days,
        dscr.dscr,
        thresholds.dscr_min,
    );
    let all_passing = results.iter().all(|r| !r.breached);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Working Capital Covenant Compliance",
        &serde_json::json!({
            "thresholds": thresholds,
            "days_in_year": assumptions.days_in_year,
        }),
        warnings,
        elapsed,
        CovenantReport {
            dscr,
            results,
            all_passing,
        },
    ))
}

/// Covenant compliance under each revenue shock (0.2 = revenue and COGS down 20%).
pub fn run_stress_test(
    fin: &FinancialInputs,
    thresholds: &CovenantThresholds,
    revenue_shocks: &[Rate],
    assumptions: &EngineAssumptions,
) -> WorkingCapitalResult<ComputationOutput<Vec<StressTestRow>>> {
    let start = Instant::now();
    fin.validate()?;
    assumptions.validate()?;
    for shock in revenue_shocks {
        if shock.abs() > MAX_REVENUE_SHOCK {
            return Err(WorkingCapitalError::InvalidInput {
                field: "revenue_shocks".into(),
                reason: format!("Shock {shock} must lie between -1 and 1"),
            });
        }
    }
    check_cycle_days(&calculator::compute_metrics_with(fin, assumptions.days_in_year))?;

    let rows = covenants::stress_test(fin, thresholds, revenue_shocks, assumptions.days_in_year);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Covenant Stress Test (revenue and COGS shocks, balances held)",
        &serde_json::json!({
            "revenue_shocks": revenue_shocks,
            "days_in_year": assumptions.days_in_year,
        }),
        Vec::new(),
        elapsed,
        rows,
    ))
}

pub fn run_insights(
    fin: &FinancialInputs,
    cash_flow_impact: Option<Money>,
    assumptions: &EngineAssumptions,
) -> WorkingCapitalResult<ComputationOutput<Vec<Insight>>> {
    let start = Instant::now();
    fin.validate()?;
    assumptions.validate()?;

    let metrics = calculator::compute_metrics_with(fin, assumptions.days_in_year);
    check_cycle_days(&metrics)?;
    let out = insights::generate_insights(&metrics, cash_flow_impact);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Rule-Based Working Capital Advisory",
        fin,
        metric_warnings(fin, &metrics),
        elapsed,
        out,
    ))
}

pub fn run_cash_release(
    fin: &FinancialInputs,
    reduce_days: Days,
    assumptions: &EngineAssumptions,
) -> WorkingCapitalResult<ComputationOutput<CashReleaseSimulation>> {
    let start = Instant::now();
    fin.validate()?;
    assumptions.validate()?;
    validate_reduce_days(reduce_days)?;

    let sim = cash_release::simulate_cash_release(reduce_days, fin.revenue, assumptions.days_in_year);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Working Capital Release Simulation",
        &serde_json::json!({ "reduce_days": reduce_days }),
        Vec::new(),
        elapsed,
        sim,
    ))
}

// ---------------------------------------------------------------------------
// Validation & warnings
// ---------------------------------------------------------------------------

fn validate_input(input: &WorkingCapitalInput) -> WorkingCapitalResult<()> {
    input.financials.validate()?;
    input.assumptions.validate()?;
    validate_horizon(input.growth_rate, input.horizon_years)?;
    validate_growth_path(&input.financials, input.growth_rate, input.horizon_years)?;
    validate_reduce_days(input.reduce_ccc_days)?;
    Ok(())
}

fn validate_horizon(growth_rate: Rate, horizon_years: u32) -> WorkingCapitalResult<()> {
    if horizon_years > MAX_HORIZON_YEARS {
        return Err(WorkingCapitalError::InvalidInput {
            field: "horizon_years".into(),
            reason: format!("Horizon cannot exceed {MAX_HORIZON_YEARS} years"),
        });
    }
    if growth_rate <= dec!(-1) {
        return Err(WorkingCapitalError::InvalidInput {
            field: "growth_rate".into(),
            reason: "Growth rate must be greater than -100%".into(),
        });
    }
    Ok(())
}

/// Compound revenue and COGS over the horizon and reject paths that leave
/// Decimal range or pass `MAX_PROJECTED_AMOUNT`.
fn validate_growth_path(
    fin: &FinancialInputs,
    growth_rate: Rate,
    horizon_years: u32,
) -> WorkingCapitalResult<()> {
    let growth = Decimal::ONE.saturating_add(growth_rate);
    let mut peak = fin.revenue.max(fin.cogs);
    for _ in 0..horizon_years {
        peak = match peak.checked_mul(growth) {
            Some(next) if next <= MAX_PROJECTED_AMOUNT => next,
            _ => {
                return Err(WorkingCapitalError::InvalidInput {
                    field: "growth_rate".into(),
                    reason: format!(
                        "Compounding {growth_rate} over {horizon_years} years exceeds {MAX_PROJECTED_AMOUNT}"
                    ),
                })
            }
        };
    }
    Ok(())
}

/// Reject cycle days no real balance sheet produces, which also keeps every
/// downstream day conversion inside Decimal range.
fn check_cycle_days(metrics: &WorkingCapitalMetrics) -> WorkingCapitalResult<()> {
    for (field, days) in [
        ("receivables", metrics.dso),
        ("inventory", metrics.dio),
        ("payables", metrics.dpo),
    ] {
        if days > MAX_CYCLE_DAYS {
            return Err(WorkingCapitalError::InvalidInput {
                field: field.into(),
                reason: format!(
                    "Implies {} days outstanding (limit {MAX_CYCLE_DAYS}); flows are too small for the balance",
                    days.round_dp(0)
                ),
            });
        }
    }
    Ok(())
}

fn validate_reduce_days(reduce_days: Days) -> WorkingCapitalResult<()> {
    if reduce_days < Decimal::ZERO || reduce_days > dec!(365) {
        return Err(WorkingCapitalError::InvalidInput {
            field: "reduce_ccc_days".into(),
            reason: "CCC reduction must be between 0 and 365 days".into(),
        });
    }
    Ok(())
}

/// Non-fatal notes on where the zero-denominator policy kicked in.
fn metric_warnings(fin: &FinancialInputs, metrics: &WorkingCapitalMetrics) -> Vec<String> {
    let mut warnings = Vec::new();
    if fin.revenue.is_zero() {
        warnings.push("Revenue is zero; DSO and receivables turnover reported as 0.".into());
    }
    if fin.cogs.is_zero() {
        warnings.push("COGS is zero; DIO and DPO reported as 0.".into());
    }
    if metrics.total_current_liabilities.is_zero() {
        warnings.push(
            "Current liabilities are zero; current, quick and cash ratios reported as 0.".into(),
        );
    }
    if metrics.net_working_capital < Decimal::ZERO {
        warnings.push(format!(
            "Negative net working capital of {}.",
            metrics.net_working_capital.round_dp(0)
        ));
    }
    warnings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_analysis_reference() {
        let out = analyze_working_capital(&WorkingCapitalInput::default()).unwrap();
        let r = &out.result;
        assert_eq!(r.metrics.net_working_capital, dec!(5_100_000));
        assert_eq!(r.forecast.len(), 5);
        assert_eq!(r.covenants.len(), 3);
        assert_eq!(r.ccc_band, CccBand::High);
        assert_eq!(r.sensitivity.dso_deltas.len(), 5);
        assert!(r.insights.iter().any(|i| i.title == "Action: Optimization Program"));
        // Reference has no debt data
        assert!(out.warnings.iter().any(|w| w.contains("Debt service")));
    }

    #[test]
    fn test_horizon_limit() {
        let input = WorkingCapitalInput {
            horizon_years: 51,
            ..Default::default()
        };
        assert!(matches!(
            analyze_working_capital(&input),
            Err(WorkingCapitalError::InvalidInput { field, .. }) if field == "horizon_years"
        ));
    }

    #[test]
    fn test_negative_input_rejected_by_envelope() {
        let fin = FinancialInputs {
            cash: dec!(-5),
            ..Default::default()
        };
        assert!(run_metrics(&fin, &EngineAssumptions::default()).is_err());
    }

    #[test]
    fn test_zero_revenue_warns() {
        let fin = FinancialInputs {
            revenue: Decimal::ZERO,
            ..Default::default()
        };
        let out = run_metrics(&fin, &EngineAssumptions::default()).unwrap();
        assert_eq!(out.result.metrics.dso, Decimal::ZERO);
        assert!(out.warnings.iter().any(|w| w.contains("Revenue is zero")));
    }

    #[test]
    fn test_input_deserializes_from_partial_json() {
        let input: WorkingCapitalInput =
            serde_json::from_str(r#"{ "horizon_years": 3 }"#).unwrap();
        assert_eq!(input.horizon_years, 3);
        assert_eq!(input.growth_rate, dec!(0.10));
        assert_eq!(input.financials, FinancialInputs::default());
    }

    #[test]
    fn test_covenant_report_all_passing_flag() {
        let fin = FinancialInputs {
            total_debt: Some(dec!(6_000_000)),
            interest_rate: Some(dec!(0.08)),
            principal_payment: Some(dec!(1_000_000)),
            ebitda_margin: Some(dec!(0.15)),
            ..Default::default()
        };
        let out = run_covenants(&fin, &CovenantThresholds::default(), &EngineAssumptions::default())
            .unwrap();
        assert!(out.result.all_passing);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_runaway_growth_rejected() {
        let fin = FinancialInputs::default();
        let err = run_forecast(&fin, dec!(1000), 50, &EngineAssumptions::default()).unwrap_err();
        assert!(matches!(
            err,
            WorkingCapitalError::InvalidInput { ref field, .. } if field == "growth_rate"
        ));

        let input = WorkingCapitalInput {
            growth_rate: dec!(1000),
            horizon_years: 50,
            ..Default::default()
        };
        assert!(analyze_working_capital(&input).is_err());
    }

    #[test]
    fn test_steep_growth_within_range_still_projects() {
        let out = run_forecast(
            &FinancialInputs::default(),
            dec!(1),
            30,
            &EngineAssumptions::default(),
        )
        .unwrap();
        assert_eq!(out.result.len(), 30);
        assert_eq!(out.result[0].revenue, dec!(40_000_000));
    }

    #[test]
    fn test_negligible_revenue_against_huge_balance_rejected() {
        let fin = FinancialInputs {
            revenue: dec!(0.0001),
            receivables: dec!(1_000_000_000_000_000),
            ..Default::default()
        };
        let err = run_metrics(&fin, &EngineAssumptions::default()).unwrap_err();
        assert!(matches!(
            err,
            WorkingCapitalError::InvalidInput { ref field, .. } if field == "receivables"
        ));
        let input = WorkingCapitalInput {
            financials: fin,
            ..Default::default()
        };
        assert!(analyze_working_capital(&input).is_err());
    }

    #[test]
    fn test_stages_share_the_day_basis() {
        let fin = FinancialInputs {
            total_debt: Some(dec!(6_000_000)),
            interest_rate: Some(dec!(0.08)),
            principal_payment: Some(dec!(1_000_000)),
            ebitda_margin: Some(dec!(0.15)),
            ..Default::default()
        };
        let banking = EngineAssumptions {
            days_in_year: dec!(360),
            ..Default::default()
        };
        let input = WorkingCapitalInput {
            financials: fin.clone(),
            assumptions: banking.clone(),
            ..Default::default()
        };
        let dashboard = analyze_working_capital(&input).unwrap().result;

        let metrics = run_metrics(&fin, &banking).unwrap().result.metrics;
        assert_eq!(metrics.ccc, dashboard.metrics.ccc);

        let report = run_covenants(&fin, &CovenantThresholds::default(), &banking)
            .unwrap()
            .result;
        let ccc_test = report
            .results
            .iter()
            .find(|r| r.name == "Maximum Cash Conversion Cycle")
            .unwrap();
        assert_eq!(ccc_test.actual, dashboard.metrics.ccc);

        let forecast = run_forecast(&fin, dec!(0.10), 5, &banking).unwrap().result;
        assert_eq!(forecast, dashboard.forecast);

        let stress = run_stress_test(&fin, &CovenantThresholds::default(), &[Decimal::ZERO], &banking)
            .unwrap()
            .result;
        assert_eq!(stress[0].ccc, dashboard.metrics.ccc);
    }

    #[test]
    fn test_stress_shock_out_of_range_rejected() {
        let err = run_stress_test(
            &FinancialInputs::default(),
            &CovenantThresholds::default(),
            &[dec!(0.2), dec!(1.5)],
            &EngineAssumptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            WorkingCapitalError::InvalidInput { ref field, .. } if field == "revenue_shocks"
        ));
    }

    #[test]
    fn test_stage_rejects_invalid_day_basis() {
        let bad = EngineAssumptions {
            days_in_year: Decimal::ZERO,
            ..Default::default()
        };
        let fin = FinancialInputs::default();
        assert!(run_forecast(&fin, dec!(0.10), 5, &bad).is_err());
        assert!(run_covenants(&fin, &CovenantThresholds::default(), &bad).is_err());
        assert!(run_insights(&fin, None, &bad).is_err());
    }
}
