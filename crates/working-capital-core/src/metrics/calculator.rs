use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::inputs::FinancialInputs;
use crate::types::{safe_div, Days, Money, Multiple, Rate, DAYS_IN_YEAR};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Derived liquidity and cycle metrics. A snapshot: recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingCapitalMetrics {
    pub total_current_assets: Money,
    pub total_current_liabilities: Money,
    /// Current assets minus current liabilities
    pub net_working_capital: Money,
    /// Current assets / current liabilities
    pub current_ratio: Multiple,
    /// (Cash + receivables) / current liabilities
    pub quick_ratio: Multiple,
    /// Cash / current liabilities
    pub cash_ratio: Multiple,
    /// Days Sales Outstanding = AR / revenue * days
    pub dso: Days,
    /// Days Inventory Outstanding = inventory / COGS * days
    pub dio: Days,
    /// Days Payable Outstanding = AP / COGS * days
    pub dpo: Days,
    /// Cash Conversion Cycle = DSO + DIO - DPO
    pub ccc: Days,
    /// Revenue / receivables
    pub receivables_turnover: Multiple,
    /// COGS / inventory
    pub inventory_turnover: Multiple,
    /// COGS / payables
    pub payables_turnover: Multiple,
    /// NWC / revenue
    pub wc_to_sales: Rate,
    /// NWC / total current assets
    pub wc_to_assets: Rate,
}

/// One line of the current-assets or current-liabilities table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetLine {
    pub label: String,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetSummary {
    pub current_assets: Vec<BalanceSheetLine>,
    pub total_current_assets: Money,
    pub current_liabilities: Vec<BalanceSheetLine>,
    pub total_current_liabilities: Money,
}

/// A bar of the CCC waterfall. DPO enters with a negative sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CccComponent {
    pub component: String,
    pub days: Days,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CccBand {
    /// Suppliers finance the operating cycle
    Negative,
    /// Below 60 days
    Moderate,
    /// Working capital tied up for a long duration
    High,
}

impl CccBand {
    pub fn description(&self) -> &'static str {
        match self {
            CccBand::Negative => "Negative CCC — strong working capital efficiency.",
            CccBand::Moderate => "Moderate CCC — manageable cycle.",
            CccBand::High => "High CCC — working capital tied up for long duration.",
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute liquidity ratios and cycle days on a 365-day basis.
///
/// Every zero denominator resolves to zero and out-of-range results saturate;
/// this never fails.
pub fn compute_metrics(inputs: &FinancialInputs) -> WorkingCapitalMetrics {
    compute_metrics_with(inputs, DAYS_IN_YEAR)
}

/// [`compute_metrics`] with an explicit day basis (e.g. 360 for some lenders).
pub fn compute_metrics_with(inputs: &FinancialInputs, days_in_year: Days) -> WorkingCapitalMetrics {
    let total_current_assets = inputs
        .cash
        .saturating_add(inputs.receivables)
        .saturating_add(inputs.inventory)
        .saturating_add(inputs.other_current_assets);
    let total_current_liabilities = inputs
        .payables
        .saturating_add(inputs.short_term_debt)
        .saturating_add(inputs.other_current_liabilities);
    let net_working_capital = total_current_assets.saturating_sub(total_current_liabilities);

    let current_ratio = safe_div(total_current_assets, total_current_liabilities);
    let quick_ratio = safe_div(
        inputs.cash.saturating_add(inputs.receivables),
        total_current_liabilities,
    );
    let cash_ratio = safe_div(inputs.cash, total_current_liabilities);

    let dso = cycle_days(inputs.receivables, inputs.revenue, days_in_year);
    let dio = cycle_days(inputs.inventory, inputs.cogs, days_in_year);
    let dpo = cycle_days(inputs.payables, inputs.cogs, days_in_year);
    let ccc = dso.saturating_add(dio).saturating_sub(dpo);

    WorkingCapitalMetrics {
        total_current_assets,
        total_current_liabilities,
        net_working_capital,
        current_ratio,
        quick_ratio,
        cash_ratio,
        dso,
        dio,
        dpo,
        ccc,
        receivables_turnover: safe_div(inputs.revenue, inputs.receivables),
        inventory_turnover: safe_div(inputs.cogs, inputs.inventory),
        payables_turnover: safe_div(inputs.cogs, inputs.payables),
        wc_to_sales: safe_div(net_working_capital, inputs.revenue),
        wc_to_assets: safe_div(net_working_capital, total_current_assets),
    }
}

/// balance / flow * days, saturating rather than overflowing.
fn cycle_days(balance: Money, flow: Money, days_in_year: Days) -> Days {
    safe_div(balance, flow).saturating_mul(days_in_year)
}

/// Current-asset and current-liability tables with their totals.
pub fn balance_sheet_summary(inputs: &FinancialInputs) -> BalanceSheetSummary {
    let current_assets = vec![
        line("Cash", inputs.cash),
        line("Receivables", inputs.receivables),
        line("Inventory", inputs.inventory),
        line("Other CA", inputs.other_current_assets),
    ];
    let current_liabilities = vec![
        line("Payables", inputs.payables),
        line("Short-Term Debt", inputs.short_term_debt),
        line("Other CL", inputs.other_current_liabilities),
    ];

    BalanceSheetSummary {
        total_current_assets: total(&current_assets),
        current_assets,
        total_current_liabilities: total(&current_liabilities),
        current_liabilities,
    }
}

/// Break the cycle into its waterfall bars: DSO, DIO, then DPO subtracted.
pub fn ccc_decomposition(metrics: &WorkingCapitalMetrics) -> Vec<CccComponent> {
    vec![
        CccComponent {
            component: "DSO".into(),
            days: metrics.dso,
        },
        CccComponent {
            component: "DIO".into(),
            days: metrics.dio,
        },
        CccComponent {
            component: "-DPO".into(),
            days: -metrics.dpo,
        },
    ]
}

pub fn classify_ccc(ccc: Days) -> CccBand {
    if ccc < Decimal::ZERO {
        CccBand::Negative
    } else if ccc < dec!(60) {
        CccBand::Moderate
    } else {
        CccBand::High
    }
}

fn total(lines: &[BalanceSheetLine]) -> Money {
    lines
        .iter()
        .fold(Decimal::ZERO, |acc, l| acc.saturating_add(l.amount))
}

fn line(label: &str, amount: Money) -> BalanceSheetLine {
    BalanceSheetLine {
        label: label.to_string(),
        amount,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
