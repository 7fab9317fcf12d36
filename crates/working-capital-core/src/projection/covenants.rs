use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assumptions::CovenantThresholds;
use crate::metrics::calculator::{compute_metrics_with, WorkingCapitalMetrics};
use crate::metrics::inputs::FinancialInputs;
use crate::types::{safe_div, Days, Money, Multiple, Rate};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CovenantDirection {
    /// Actual must not exceed threshold.
    MaxOf,
    /// Actual must not fall below threshold.
    MinOf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CovenantResult {
    pub name: String,
    pub direction: CovenantDirection,
    pub threshold: Decimal,
    pub actual: Decimal,
    pub breached: bool,
    /// Distance to the threshold; negative when breached
    pub headroom: Decimal,
    pub headroom_pct: Rate,
}

/// Debt service coverage built from the optional debt fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DscrBreakdown {
    /// revenue * ebitda_margin
    pub ebitda: Money,
    /// total_debt * interest_rate
    pub interest: Money,
    pub principal_payment: Money,
    /// interest + principal
    pub debt_service: Money,
    /// ebitda / debt_service, zero when there is no debt service
    pub dscr: Multiple,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressTestRow {
    /// Fractional fall in revenue and COGS (0.2 = 20% decline)
    pub revenue_shock: Rate,
    pub current_ratio: Multiple,
    pub ccc: Decimal,
    pub dscr: Multiple,
    pub breaches: Vec<String>,
    pub all_passing: bool,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// DSCR = EBITDA / (interest + principal). Missing optional fields count as zero.
pub fn compute_dscr(inputs: &FinancialInputs) -> DscrBreakdown {
    let ebitda = inputs
        .revenue
        .saturating_mul(inputs.ebitda_margin.unwrap_or(Decimal::ZERO));
    let interest = inputs
        .total_debt
        .unwrap_or(Decimal::ZERO)
        .saturating_mul(inputs.interest_rate.unwrap_or(Decimal::ZERO));
    let principal_payment = inputs.principal_payment.unwrap_or(Decimal::ZERO);
    let debt_service = interest.saturating_add(principal_payment);

    DscrBreakdown {
        ebitda,
        interest,
        principal_payment,
        debt_service,
        dscr: safe_div(ebitda, debt_service),
    }
}

/// Test the three working-capital covenants. Breach policy:
/// current ratio below the minimum, CCC above the maximum, DSCR below the minimum.
pub fn covenant_check(
    metrics: &WorkingCapitalMetrics,
    min_current_ratio: Multiple,
    max_ccc_days: Decimal,
    dscr: Multiple,
    dscr_min: Multiple,
) -> Vec<CovenantResult> {
    vec![
        evaluate(
            "Minimum Current Ratio",
            CovenantDirection::MinOf,
            min_current_ratio,
            metrics.current_ratio,
        ),
        evaluate(
            "Maximum Cash Conversion Cycle",
            CovenantDirection::MaxOf,
            max_ccc_days,
            metrics.ccc,
        ),
        evaluate(
            "Minimum DSCR",
            CovenantDirection::MinOf,
            dscr_min,
            dscr,
        ),
    ]
}

/// Re-run the covenants after shrinking revenue and COGS by each shock while
/// balance-sheet positions stay where they are.
pub fn stress_test(
    inputs: &FinancialInputs,
    thresholds: &CovenantThresholds,
    revenue_shocks: &[Rate],
    days_in_year: Days,
) -> Vec<StressTestRow> {
    revenue_shocks
        .iter()
        .map(|shock| {
            let factor = Decimal::ONE.saturating_sub(*shock);
            let stressed = FinancialInputs {
                revenue: inputs.revenue.saturating_mul(factor),
                cogs: inputs.cogs.saturating_mul(factor),
                ..inputs.clone()
            };
            let metrics = compute_metrics_with(&stressed, days_in_year);
            let dscr = compute_dscr(&stressed).dscr;
            let results = covenant_check(
                &metrics,
                thresholds.min_current_ratio,
                thresholds.max_ccc_days,
                dscr,
                thresholds.dscr_min,
            );
            let breaches: Vec<String> = results
                .iter()
                .filter(|r| r.breached)
                .map(|r| r.name.clone())
                .collect();

            StressTestRow {
                revenue_shock: *shock,
                current_ratio: metrics.current_ratio,
                ccc: metrics.ccc,
                dscr,
                all_passing: breaches.is_empty(),
                breaches,
            }
        })
        .collect()
}

fn evaluate(
    name: &str,
    direction: CovenantDirection,
    threshold: Decimal,
    actual: Decimal,
) -> CovenantResult {
    let (breached, headroom) = match direction {
        CovenantDirection::MaxOf => (actual > threshold, threshold.saturating_sub(actual)),
        CovenantDirection::MinOf => (actual < threshold, actual.saturating_sub(threshold)),
    };

    CovenantResult {
        name: name.to_string(),
        direction,
        threshold,
        actual,
        breached,
        headroom,
        headroom_pct: safe_div(headroom, threshold),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::calculator::compute_metrics;
    use rust_decimal_macros::dec;

    fn levered_company() -> FinancialInputs {
        FinancialInputs {
            total_debt: Some(dec!(6_000_000)),
            interest_rate: Some(dec!(0.08)),
            principal_payment: Some(dec!(1_000_000)),
            ebitda_margin: Some(dec!(0.15)),
            ..Default::default()
        }
    }

    #[test]
    fn test_dscr_breakdown() {
        let d = compute_dscr(&levered_company());
        // EBITDA = 20M * 0.15 = 3M; interest = 6M * 0.08 = 480k
        assert_eq!(d.ebitda, dec!(3_000_000));
        assert_eq!(d.interest, dec!(480_000));
        assert_eq!(d.debt_service, dec!(1_480_000));
        assert_eq!(d.dscr, dec!(3_000_000) / dec!(1_480_000));
    }

    #[test]
    fn test_dscr_zero_without_debt_service() {
        let d = compute_dscr(&FinancialInputs::default());
        assert_eq!(d.debt_service, Decimal::ZERO);
        assert_eq!(d.dscr, Decimal::ZERO);
    }

    #[test]
    fn test_reference_passes_liquidity_and_ccc() {
        let inputs = levered_company();
        let m = compute_metrics(&inputs);
        let dscr = compute_dscr(&inputs).dscr;
        let results = covenant_check(&m, dec!(1.2), dec!(90), dscr, dec!(1.25));
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| !r.breached));
        assert!(results[0].headroom > Decimal::ZERO);
    }

    #[test]
    fn test_breaches_detected() {
        let m = compute_metrics(&FinancialInputs::default());
        let results = covenant_check(&m, dec!(2.5), dec!(60), dec!(1.0), dec!(1.25));
        assert!(results[0].breached, "current ratio 1.94 < 2.5");
        assert!(results[1].breached, "ccc 78.2 > 60");
        assert!(results[2].breached, "dscr 1.0 < 1.25");
        assert!(results[1].headroom < Decimal::ZERO);
    }

    #[test]
    fn test_threshold_equality_is_not_a_breach() {
        let m = compute_metrics(&FinancialInputs::default());
        let results = covenant_check(&m, m.current_ratio, m.ccc, dec!(1.25), dec!(1.25));
        assert!(results.iter().all(|r| !r.breached));
    }

    #[test]
    fn test_stress_lengthens_cycle() {
        let inputs = levered_company();
        let rows = stress_test(
            &inputs,
            &CovenantThresholds::default(),
            &[dec!(0), dec!(0.3)],
            dec!(365),
        );
        assert_eq!(rows.len(), 2);
        assert!(rows[1].ccc > rows[0].ccc);
        assert!(rows[1].dscr < rows[0].dscr);
        assert!(rows[0].all_passing);
        assert!(rows[1]
            .breaches
            .contains(&"Maximum Cash Conversion Cycle".to_string()));
    }

    #[test]
    fn test_stress_uses_day_basis() {
        let inputs = levered_company();
        let shocks = [dec!(0)];
        let thresholds = CovenantThresholds::default();
        let on_365 = stress_test(&inputs, &thresholds, &shocks, dec!(365));
        let on_360 = stress_test(&inputs, &thresholds, &shocks, dec!(360));
        assert_eq!(on_365[0].ccc, compute_metrics(&inputs).ccc);
        assert_eq!(on_360[0].ccc, compute_metrics_with(&inputs, dec!(360)).ccc);
        assert!(on_360[0].ccc < on_365[0].ccc);
    }
}
