use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use working_capital_core::analysis::{self, WorkingCapitalInput};
use working_capital_core::metrics::calculator::compute_metrics;
use working_capital_core::metrics::inputs::FinancialInputs;
use working_capital_core::projection::{covenants, forecast, scenarios, sensitivity};
use working_capital_core::{CovenantThresholds, EngineAssumptions, ScenarioMultipliers};

// ===========================================================================
// Forecast
// ===========================================================================

#[test]
fn test_forecast_holds_cycle_days_constant() {
    let base = FinancialInputs::default();
    let m = compute_metrics(&base);
    let rows = forecast::forecast(&base, &m, dec!(0.05), 4);

    for row in &rows {
        let implied_dso = row.receivables / row.revenue * dec!(365);
        assert_eq!(implied_dso.round_dp(8), m.dso.round_dp(8));
        let implied_dpo = row.payables / row.cogs * dec!(365);
        assert_eq!(implied_dpo.round_dp(8), m.dpo.round_dp(8));
    }
    assert_eq!(rows.iter().map(|r| r.year).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
}

#[test]
fn test_forecast_working_capital_grows_with_revenue() {
    let base = FinancialInputs::default();
    let m = compute_metrics(&base);
    let rows = forecast::forecast(&base, &m, dec!(0.10), 2);
    // Base operating WC 4.5M grows 10% a year
    assert_eq!(rows[0].working_capital.round_dp(6), dec!(4_950_000));
    assert_eq!(rows[1].working_capital.round_dp(6), dec!(5_445_000));
    assert_eq!(rows[0].change_in_working_capital.round_dp(6), dec!(450_000));
}

#[test]
fn test_forecast_negative_growth() {
    let base = FinancialInputs::default();
    let m = compute_metrics(&base);
    let rows = forecast::forecast(&base, &m, dec!(-0.10), 1);
    assert_eq!(rows[0].revenue, dec!(18_000_000));
    assert!(rows[0].change_in_working_capital < Decimal::ZERO);
}

// ===========================================================================
// Scenarios
// ===========================================================================

#[test]
fn test_scenario_cash_impact_formula() {
    let base = FinancialInputs::default();
    let m = compute_metrics(&base);
    let a = EngineAssumptions::default();
    let set = scenarios::scenario_analysis(&m, base.revenue, &a);

    let expected = (m.ccc - set.worst.ccc) / dec!(365) * base.revenue * dec!(0.08);
    assert_eq!(set.worst.cash_impact, expected);
    assert_eq!(set.iter().count(), 3);
}

#[test]
fn test_overridden_margin_scales_impact() {
    let base = FinancialInputs::default();
    let m = compute_metrics(&base);
    let default_set = scenarios::scenario_analysis(&m, base.revenue, &EngineAssumptions::default());
    let doubled = scenarios::scenario_analysis(
        &m,
        base.revenue,
        &EngineAssumptions {
            cash_flow_margin: dec!(0.16),
            ..Default::default()
        },
    );
    assert_eq!(
        (default_set.best.cash_impact * dec!(2)).round_dp(8),
        doubled.best.cash_impact.round_dp(8)
    );
}

#[test]
fn test_identity_custom_scenario_matches_base() {
    let base = FinancialInputs::default();
    let m = compute_metrics(&base);
    let a = EngineAssumptions::default();
    let custom =
        scenarios::custom_scenario("Flat", &m, &ScenarioMultipliers::identity(), base.revenue, &a);
    let set = scenarios::scenario_analysis(&m, base.revenue, &a);
    assert_eq!(custom.ccc, set.base.ccc);
    assert_eq!(custom.cash_impact, Decimal::ZERO);
}

// ===========================================================================
// Sensitivity
// ===========================================================================

#[test]
fn test_sensitivity_symmetry() {
    let range = sensitivity::DayRange::default().values().unwrap();
    let grid = sensitivity::sensitivity_grid(
        dec!(78),
        dec!(20_000_000),
        &range,
        &range,
        &EngineAssumptions::default(),
    );
    // Linear with no cross terms: swapping the deltas gives the same impact
    for i in 0..range.len() {
        for j in 0..range.len() {
            assert_eq!(grid.cash_impact[i][j], grid.cash_impact[j][i]);
        }
    }
    assert_eq!(grid.lookup(dec!(0), dec!(0)), Some(Decimal::ZERO));
    assert_eq!(grid.lookup(dec!(3), dec!(0)), None);
}

// ===========================================================================
// Covenants
// ===========================================================================

#[test]
fn test_covenant_names_and_order() {
    let m = compute_metrics(&FinancialInputs::default());
    let results = covenants::covenant_check(&m, dec!(1.2), dec!(90), dec!(2), dec!(1.25));
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Minimum Current Ratio",
            "Maximum Cash Conversion Cycle",
            "Minimum DSCR",
        ]
    );
}

#[test]
fn test_missing_debt_data_breaches_dscr() {
    // DSCR degrades to zero, which breaches any positive minimum
    let out = analysis::run_covenants(
        &FinancialInputs::default(),
        &CovenantThresholds::default(),
        &EngineAssumptions::default(),
    )
    .unwrap();
    assert_eq!(out.result.dscr.dscr, Decimal::ZERO);
    assert!(out.result.results[2].breached);
    assert!(!out.result.all_passing);
}

#[test]
fn test_stress_test_zero_shock_matches_base() {
    let inputs = FinancialInputs::default();
    let rows = covenants::stress_test(
        &inputs,
        &CovenantThresholds::default(),
        &[Decimal::ZERO],
        dec!(365),
    );
    assert_eq!(rows[0].ccc, compute_metrics(&inputs).ccc);
}

// ===========================================================================
// Full analysis envelope
// ===========================================================================

#[test]
fn test_full_analysis_metadata() {
    let out = analysis::analyze_working_capital(&WorkingCapitalInput::default()).unwrap();
    assert_eq!(out.metadata.precision, "rust_decimal_128bit");
    assert!(out.methodology.contains("Working Capital"));
    assert_eq!(out.result.cash_release.reduce_days, dec!(10));
    // 10 / 365 * 20M
    assert_eq!(out.result.cash_release.cash_release.round_dp(2), dec!(547_945.21));
}

#[test]
fn test_full_analysis_rejects_bad_range() {
    let input = WorkingCapitalInput {
        dso_range: sensitivity::DayRange {
            min: dec!(5),
            max: dec!(-5),
            step: dec!(1),
        },
        ..Default::default()
    };
    assert!(analysis::analyze_working_capital(&input).is_err());
}

#[test]
fn test_sensitivity_envelope_rejects_oversized_sweep() {
    let dense = sensitivity::DayRange {
        min: dec!(-10),
        max: dec!(10),
        step: dec!(0.0001),
    };
    let out = analysis::run_sensitivity(
        &FinancialInputs::default(),
        &dense,
        &sensitivity::DayRange::default(),
        &EngineAssumptions::default(),
    );
    assert!(out.is_err());

    let input = WorkingCapitalInput {
        dio_range: dense,
        ..Default::default()
    };
    assert!(analysis::analyze_working_capital(&input).is_err());
}
