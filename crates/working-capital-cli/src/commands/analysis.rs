use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use working_capital_core::analysis::{self, WorkingCapitalInput};
use working_capital_core::projection::sensitivity::DayRange;

use super::{read_document, FinancialArgs};
use crate::config::DashboardConfig;

/// Arguments for liquidity and cycle metrics
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct MetricsArgs {
    #[command(flatten)]
    pub financials: FinancialArgs,
}

/// Arguments for the working capital forecast
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ForecastArgs {
    #[command(flatten)]
    pub financials: FinancialArgs,

    /// Annual revenue and COGS growth rate, as a decimal
    #[arg(long, default_value = "0.10")]
    pub growth_rate: Decimal,

    /// Number of years to project
    #[arg(long, default_value_t = 5)]
    pub horizon_years: u32,
}

/// Arguments for best/base/worst scenarios
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScenarioArgs {
    #[command(flatten)]
    pub financials: FinancialArgs,
}

/// Arguments for the DSO x DIO sensitivity grid
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct SensitivityArgs {
    #[command(flatten)]
    pub financials: FinancialArgs,

    /// DSO reductions in format min:max:step (e.g. "-10:10:5")
    #[arg(long, default_value = "-10:10:5")]
    pub dso_range: String,

    /// DIO reductions in format min:max:step
    #[arg(long, default_value = "-10:10:5")]
    pub dio_range: String,
}

/// Arguments for covenant compliance and stress testing
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CovenantArgs {
    #[command(flatten)]
    pub financials: FinancialArgs,

    /// Minimum current ratio (overrides config)
    #[arg(long)]
    pub min_current_ratio: Option<Decimal>,

    /// Maximum CCC in days (overrides config)
    #[arg(long)]
    pub max_ccc_days: Option<Decimal>,

    /// Minimum DSCR (overrides config)
    #[arg(long)]
    pub dscr_min: Option<Decimal>,

    /// Comma-separated revenue shocks to stress, e.g. "0.1,0.2,0.3"
    #[arg(long, value_delimiter = ',')]
    pub stress: Vec<Decimal>,
}

/// Arguments for the advisory engine
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct InsightArgs {
    #[command(flatten)]
    pub financials: FinancialArgs,

    /// Cash flow impact to report as a release opportunity
    #[arg(long)]
    pub cash_flow_impact: Option<Decimal>,
}

/// Arguments for the cash release simulation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CashReleaseArgs {
    #[command(flatten)]
    pub financials: FinancialArgs,

    /// Days to take out of the cash conversion cycle
    #[arg(long, default_value = "10")]
    pub reduce_days: Decimal,
}

/// Arguments for the full dashboard report
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct DashboardArgs {
    /// Path to a complete analysis document (financials, growth, ranges, assumptions)
    #[arg(long)]
    pub document: Option<String>,

    #[command(flatten)]
    pub financials: FinancialArgs,

    #[arg(long, default_value = "0.10")]
    pub growth_rate: Decimal,

    #[arg(long, default_value_t = 5)]
    pub horizon_years: u32,

    #[arg(long, default_value = "10")]
    pub reduce_days: Decimal,
}

pub fn run_metrics(
    args: MetricsArgs,
    config: &DashboardConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let fin = args.financials.resolve()?;
    let result = analysis::run_metrics(&fin, &config.assumptions)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_forecast(
    args: ForecastArgs,
    config: &DashboardConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let fin = args.financials.resolve()?;
    tracing::info!(growth_rate = %args.growth_rate, horizon_years = args.horizon_years, "forecasting");
    let result = analysis::run_forecast(
        &fin,
        args.growth_rate,
        args.horizon_years,
        &config.assumptions,
    )?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_scenarios(
    args: ScenarioArgs,
    config: &DashboardConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let fin = args.financials.resolve()?;
    let result = analysis::run_scenarios(&fin, &config.assumptions)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_sensitivity(
    args: SensitivityArgs,
    config: &DashboardConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let fin = args.financials.resolve()?;
    let dso_range = parse_day_range(&args.dso_range)?;
    let dio_range = parse_day_range(&args.dio_range)?;
    let result = analysis::run_sensitivity(&fin, &dso_range, &dio_range, &config.assumptions)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_covenants(
    args: CovenantArgs,
    config: &DashboardConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let fin = args.financials.resolve()?;
    let mut thresholds = config.covenants.clone();
    if let Some(v) = args.min_current_ratio {
        thresholds.min_current_ratio = v;
    }
    if let Some(v) = args.max_ccc_days {
        thresholds.max_ccc_days = v;
    }
    if let Some(v) = args.dscr_min {
        thresholds.dscr_min = v;
    }

    let result = analysis::run_covenants(&fin, &thresholds, &config.assumptions)?;
    let mut value = serde_json::to_value(result)?;

    if !args.stress.is_empty() {
        let stress =
            analysis::run_stress_test(&fin, &thresholds, &args.stress, &config.assumptions)?;
        tracing::info!(shocks = args.stress.len(), "ran covenant stress test");
        if let Some(obj) = value.get_mut("result").and_then(Value::as_object_mut) {
            obj.insert("stress_test".into(), serde_json::to_value(stress.result)?);
        }
    }
    Ok(value)
}

pub fn run_insights(
    args: InsightArgs,
    config: &DashboardConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let fin = args.financials.resolve()?;
    let result = analysis::run_insights(&fin, args.cash_flow_impact, &config.assumptions)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_cash_release(
    args: CashReleaseArgs,
    config: &DashboardConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let fin = args.financials.resolve()?;
    let result = analysis::run_cash_release(&fin, args.reduce_days, &config.assumptions)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_dashboard(
    args: DashboardArgs,
    config: &DashboardConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    // A financials file means the document is not coming over stdin.
    let document = if args.document.is_none() && args.financials.input.is_some() {
        None
    } else {
        read_document(args.document.as_deref())?
    };
    let input: WorkingCapitalInput = match document {
        Some(doc) => doc,
        None => input_from_args(&args, config)?,
    };
    tracing::info!(horizon_years = input.horizon_years, "building dashboard report");
    let result = analysis::analyze_working_capital(&input)?;
    Ok(serde_json::to_value(result)?)
}

/// Assemble a dashboard document from `--input`/stdin/flag financials and the config.
fn input_from_args(
    args: &DashboardArgs,
    config: &DashboardConfig,
) -> Result<WorkingCapitalInput, Box<dyn std::error::Error>> {
    Ok(WorkingCapitalInput {
        financials: args.financials.resolve()?,
        growth_rate: args.growth_rate,
        horizon_years: args.horizon_years,
        reduce_ccc_days: args.reduce_days,
        assumptions: config.assumptions.clone(),
        covenants: config.covenants.clone(),
        ..Default::default()
    })
}

fn parse_day_range(raw: &str) -> Result<DayRange, Box<dyn std::error::Error>> {
    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() != 3 {
        return Err(format!("Day range must be min:max:step, got '{}'", raw).into());
    }
    Ok(DayRange {
        min: parts[0].parse()?,
        max: parts[1].parse()?,
        step: parts[2].parse()?,
    })
}
