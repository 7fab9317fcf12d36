mod commands;
mod config;
mod input;
mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::analysis::{
    CashReleaseArgs, CovenantArgs, DashboardArgs, ForecastArgs, InsightArgs, MetricsArgs,
    ScenarioArgs, SensitivityArgs,
};
use commands::demo::{CashForecastArgs, RiskScoreArgs};
use config::DashboardConfig;

/// Working capital metrics, projections and advisory insights
#[derive(Parser)]
#[command(
    name = "wca",
    version,
    about = "Working capital metrics, projections and advisory insights",
    long_about = "A CLI for analysing a company's working capital with decimal precision. \
                  Computes liquidity ratios and the cash conversion cycle, projects working \
                  capital under growth and scenarios, checks covenants, and produces \
                  rule-based recommendations."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// YAML file with assumptions, covenant thresholds and branding
    #[arg(long, global = true)]
    config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Liquidity ratios, cycle days and balance-sheet summary
    Metrics(MetricsArgs),
    /// Project revenue, COGS and working capital over a horizon
    Forecast(ForecastArgs),
    /// Best, base and worst case cycle scenarios
    Scenarios(ScenarioArgs),
    /// Cash impact grid over DSO and DIO reductions
    Sensitivity(SensitivityArgs),
    /// Covenant compliance (current ratio, CCC, DSCR) with optional stress test
    Covenants(CovenantArgs),
    /// Rule-based advisory insights
    Insights(InsightArgs),
    /// Cash released by shortening the cash conversion cycle
    CashRelease(CashReleaseArgs),
    /// Full dashboard report combining every analysis
    Dashboard(DashboardArgs),
    /// Demo: score invoices with a model fitted on synthetic data
    RiskScore(RiskScoreArgs),
    /// Demo: trend forecast of synthetic monthly cash balances
    CashForecast(CashForecastArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wca={}", default_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match DashboardConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Metrics(args) => commands::analysis::run_metrics(args, &config),
        Commands::Forecast(args) => commands::analysis::run_forecast(args, &config),
        Commands::Scenarios(args) => commands::analysis::run_scenarios(args, &config),
        Commands::Sensitivity(args) => commands::analysis::run_sensitivity(args, &config),
        Commands::Covenants(args) => commands::analysis::run_covenants(args, &config),
        Commands::Insights(args) => commands::analysis::run_insights(args, &config),
        Commands::CashRelease(args) => commands::analysis::run_cash_release(args, &config),
        Commands::Dashboard(args) => commands::analysis::run_dashboard(args, &config),
        Commands::RiskScore(args) => commands::demo::run_risk_score(args),
        Commands::CashForecast(args) => commands::demo::run_cash_forecast(args),
        Commands::Version => {
            println!("wca {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value, &config);
            process::exit(0);
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
