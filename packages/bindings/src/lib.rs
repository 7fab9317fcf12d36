use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use working_capital_core::analysis::{self, WorkingCapitalInput};
use working_capital_core::demo_models::{cash_forecast, receivables_risk};
use working_capital_core::types::Money;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Every stage accepts the same document as the full analysis; fields a stage
/// does not use are ignored and missing fields take their defaults.
fn parse_input(input_json: &str) -> NapiResult<WorkingCapitalInput> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

#[derive(Deserialize)]
struct InsightRequest {
    #[serde(flatten)]
    input: WorkingCapitalInput,
    #[serde(default)]
    cash_flow_impact: Option<Money>,
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_metrics(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output =
        analysis::run_metrics(&input.financials, &input.assumptions).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

#[napi]
pub fn forecast(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output = analysis::run_forecast(
        &input.financials,
        input.growth_rate,
        input.horizon_years,
        &input.assumptions,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn scenario_analysis(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output =
        analysis::run_scenarios(&input.financials, &input.assumptions).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn sensitivity_grid(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output = analysis::run_sensitivity(
        &input.financials,
        &input.dso_range,
        &input.dio_range,
        &input.assumptions,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn covenant_check(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output = analysis::run_covenants(&input.financials, &input.covenants, &input.assumptions)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn simulate_cash_release(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output =
        analysis::run_cash_release(&input.financials, input.reduce_ccc_days, &input.assumptions)
            .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Advisory
// ---------------------------------------------------------------------------

#[napi]
pub fn generate_insights(input_json: String) -> NapiResult<String> {
    let req: InsightRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = analysis::run_insights(
        &req.input.financials,
        req.cash_flow_impact,
        &req.input.assumptions,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn analyze_working_capital(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output = analysis::analyze_working_capital(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Demo models (synthetic data)
// ---------------------------------------------------------------------------

#[napi]
pub fn score_receivables_risk(input_json: String) -> NapiResult<String> {
    let input: receivables_risk::ReceivablesRiskInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = receivables_risk::score_receivables_risk(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn forecast_cash(input_json: String) -> NapiResult<String> {
    let input: cash_forecast::CashForecastInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = cash_forecast::forecast_cash(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
