use clap::Args;
use serde_json::Value;

use working_capital_core::demo_models::cash_forecast::{self, CashForecastInput};
use working_capital_core::demo_models::receivables_risk::{self, ReceivablesRiskInput};
use working_capital_core::demo_models::synthetic::CashHistoryConfig;

use super::read_document;

/// Arguments for the demo receivables risk scorer
#[derive(Args)]
pub struct RiskScoreArgs {
    /// Path to JSON document listing the invoices to score (or pipe via stdin)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the demo cash balance forecast
#[derive(Args)]
pub struct CashForecastArgs {
    /// Path to JSON document (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Seed for the synthetic cash history
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Months to extend the trend
    #[arg(long, default_value_t = 6)]
    pub months_ahead: u32,
}

pub fn run_risk_score(args: RiskScoreArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input: ReceivablesRiskInput = read_document(args.input.as_deref())?
        .ok_or("--input <invoices.json> or stdin JSON required for risk-score")?;
    tracing::info!(invoices = input.invoices.len(), seed = input.data.seed, "scoring receivables");
    let result = receivables_risk::score_receivables_risk(&input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_cash_forecast(args: CashForecastArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input: CashForecastInput = match read_document(args.input.as_deref())? {
        Some(doc) => doc,
        None => CashForecastInput {
            data: CashHistoryConfig {
                seed: args.seed,
                ..Default::default()
            },
            months_ahead: args.months_ahead,
        },
    };
    tracing::info!(months_ahead = input.months_ahead, seed = input.data.seed, "forecasting cash");
    let result = cash_forecast::forecast_cash(&input)?;
    Ok(serde_json::to_value(result)?)
}
