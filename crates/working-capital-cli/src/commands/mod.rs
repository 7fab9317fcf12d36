pub mod analysis;
pub mod demo;

use clap::Args;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use working_capital_core::metrics::inputs::FinancialInputs;

use crate::input;

/// Balance-sheet and income-statement flags shared by the analysis commands.
/// Any flag left out falls back to the reference company.
#[derive(Args, Debug, Default)]
pub struct FinancialArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Annual revenue
    #[arg(long)]
    pub revenue: Option<Decimal>,

    /// Annual cost of goods sold
    #[arg(long)]
    pub cogs: Option<Decimal>,

    /// Cash and equivalents
    #[arg(long)]
    pub cash: Option<Decimal>,

    /// Accounts receivable
    #[arg(long, alias = "ar")]
    pub receivables: Option<Decimal>,

    /// Inventory
    #[arg(long)]
    pub inventory: Option<Decimal>,

    /// Other current assets
    #[arg(long)]
    pub other_current_assets: Option<Decimal>,

    /// Accounts payable
    #[arg(long, alias = "ap")]
    pub payables: Option<Decimal>,

    /// Short-term debt
    #[arg(long)]
    pub short_term_debt: Option<Decimal>,

    /// Other current liabilities
    #[arg(long)]
    pub other_current_liabilities: Option<Decimal>,

    /// Total debt (for DSCR)
    #[arg(long)]
    pub total_debt: Option<Decimal>,

    /// Interest rate on total debt, as a decimal
    #[arg(long)]
    pub interest_rate: Option<Decimal>,

    /// Annual principal repayment
    #[arg(long)]
    pub principal_payment: Option<Decimal>,

    /// EBITDA margin, as a decimal
    #[arg(long)]
    pub ebitda_margin: Option<Decimal>,
}

impl FinancialArgs {
    /// Resolve inputs from `--input`, piped stdin, or flags over the reference defaults.
    pub fn resolve(&self) -> Result<FinancialInputs, Box<dyn std::error::Error>> {
        if let Some(ref path) = self.input {
            tracing::info!(source = "file", path = %path, "loading financial inputs");
            return input::file::read_json(path);
        }
        if let Some(data) = input::stdin::read_stdin()? {
            tracing::info!(source = "stdin", "loading financial inputs");
            return Ok(serde_json::from_value(data)?);
        }

        tracing::info!(source = "flags", "loading financial inputs");
        Ok(self.to_inputs())
    }

    /// Build inputs from the individual flags, defaulting each to the reference company.
    pub fn to_inputs(&self) -> FinancialInputs {
        let d = FinancialInputs::default();
        FinancialInputs {
            revenue: self.revenue.unwrap_or(d.revenue),
            cogs: self.cogs.unwrap_or(d.cogs),
            cash: self.cash.unwrap_or(d.cash),
            receivables: self.receivables.unwrap_or(d.receivables),
            inventory: self.inventory.unwrap_or(d.inventory),
            other_current_assets: self.other_current_assets.unwrap_or(d.other_current_assets),
            payables: self.payables.unwrap_or(d.payables),
            short_term_debt: self.short_term_debt.unwrap_or(d.short_term_debt),
            other_current_liabilities: self
                .other_current_liabilities
                .unwrap_or(d.other_current_liabilities),
            total_debt: self.total_debt,
            interest_rate: self.interest_rate,
            principal_payment: self.principal_payment,
            ebitda_margin: self.ebitda_margin,
        }
    }
}

/// Load a whole-command JSON document from `--input` or stdin, if one was given.
pub fn read_document<T: DeserializeOwned>(
    path: Option<&str>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return Ok(Some(input::file::read_json(path)?));
    }
    match input::stdin::read_stdin()? {
        Some(data) => Ok(Some(serde_json::from_value(data)?)),
        None => Ok(None),
    }
}
