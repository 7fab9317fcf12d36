use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::metrics::calculator::WorkingCapitalMetrics;
use crate::types::Money;

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

const CRITICAL_CURRENT_RATIO: Decimal = dec!(1.0);
const HEALTHY_CURRENT_RATIO: Decimal = dec!(1.5);
const EXTENDED_CCC_DAYS: Decimal = dec!(90);
const MAX_DSO_DAYS: Decimal = dec!(90);
const MAX_DIO_DAYS: Decimal = dec!(90);
const MIN_DPO_DAYS: Decimal = dec!(45);
const OPTIMIZATION_CCC_DAYS: Decimal = dec!(60);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Insight {
    fn new(severity: Severity, title: &str, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.to_string(),
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Evaluate the advisory rules in their fixed order.
///
/// The liquidity rule always fires, so the result is never empty. Rules are
/// independent; nothing is deduplicated or re-ranked.
pub fn generate_insights(
    metrics: &WorkingCapitalMetrics,
    cash_flow_impact: Option<Money>,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    insights.push(liquidity_insight(metrics));

    if metrics.ccc < Decimal::ZERO {
        insights.push(Insight::new(
            Severity::Success,
            "Negative CCC Advantage",
            format!(
                "Cash conversion cycle of {} days: suppliers are financing operations.",
                metrics.ccc.round_dp(1)
            ),
        ));
    } else if metrics.ccc > EXTENDED_CCC_DAYS {
        insights.push(Insight::new(
            Severity::Warning,
            "Extended Cash Conversion Cycle",
            format!(
                "Cash conversion cycle of {} days exceeds {EXTENDED_CCC_DAYS} days; cash is tied up in operations.",
                metrics.ccc.round_dp(1)
            ),
        ));
    }

    let actions = action_insights(metrics);
    if actions.is_empty() {
        insights.push(Insight::new(
            Severity::Success,
            "Efficient Structure",
            "Working capital structure appears efficient.",
        ));
    } else {
        insights.extend(actions);
    }

    if let Some(impact) = cash_flow_impact {
        if impact > Decimal::ZERO {
            insights.push(Insight::new(
                Severity::Info,
                "Cash Release Opportunity",
                format!(
                    "Improving the cycle could release approximately {} in cash.",
                    impact.round_dp(0)
                ),
            ));
        }
    }

    insights
}

/// The action messages alone, or the efficient-structure message when none apply.
pub fn recommendations(metrics: &WorkingCapitalMetrics) -> Vec<String> {
    let actions = action_insights(metrics);
    if actions.is_empty() {
        vec!["Working capital structure appears efficient.".to_string()]
    } else {
        actions.into_iter().map(|i| i.message).collect()
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn liquidity_insight(metrics: &WorkingCapitalMetrics) -> Insight {
    let current_ratio = metrics.current_ratio;
    if metrics.total_current_liabilities.is_zero() {
        // The ratio resolved to zero from an empty denominator.
        Insight::new(
            Severity::Danger,
            "Critical Liquidity Risk",
            "No current liabilities reported, so the current ratio reads 0x and liquidity cannot be assessed; check the liability inputs.",
        )
    } else if current_ratio < CRITICAL_CURRENT_RATIO {
        Insight::new(
            Severity::Danger,
            "Critical Liquidity Risk",
            format!(
                "Current ratio of {}x is below 1.0: current liabilities exceed current assets.",
                current_ratio.round_dp(2)
            ),
        )
    } else if current_ratio < HEALTHY_CURRENT_RATIO {
        Insight::new(
            Severity::Warning,
            "Liquidity Concern",
            format!(
                "Current ratio of {}x is below the 1.5x comfort level.",
                current_ratio.round_dp(2)
            ),
        )
    } else {
        Insight::new(
            Severity::Success,
            "Strong Liquidity",
            format!(
                "Current ratio of {}x comfortably covers short-term obligations.",
                current_ratio.round_dp(2)
            ),
        )
    }
}

fn action_insights(metrics: &WorkingCapitalMetrics) -> Vec<Insight> {
    let mut actions = Vec::new();
    if metrics.dso > MAX_DSO_DAYS {
        actions.push(Insight::new(
            Severity::Warning,
            "Action: Credit Control",
            "Tighten credit control policies.",
        ));
    }
    if metrics.dio > MAX_DIO_DAYS {
        actions.push(Insight::new(
            Severity::Warning,
            "Action: Inventory",
            "Optimize inventory procurement cycle.",
        ));
    }
    if metrics.dpo < MIN_DPO_DAYS {
        actions.push(Insight::new(
            Severity::Warning,
            "Action: Supplier Terms",
            "Negotiate extended supplier terms.",
        ));
    }
    if metrics.ccc > OPTIMIZATION_CCC_DAYS {
        actions.push(Insight::new(
            Severity::Warning,
            "Action: Optimization Program",
            "Launch structured working capital optimization program.",
        ));
    }
    actions
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
