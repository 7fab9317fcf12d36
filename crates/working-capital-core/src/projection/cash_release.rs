use serde::{Deserialize, Serialize};

use crate::types::{safe_div, Days, Money};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashReleaseSimulation {
    pub reduce_days: Days,
    pub revenue: Money,
    /// Revenue per day of cycle
    pub daily_revenue: Money,
    /// reduce_days / days * revenue, gross of any margin
    pub cash_release: Money,
}

/// Cash freed by shortening the cash conversion cycle by `reduce_days`.
pub fn simulate_cash_release(
    reduce_days: Days,
    revenue: Money,
    days_in_year: Days,
) -> CashReleaseSimulation {
    let daily_revenue = safe_div(revenue, days_in_year);
    let cash_release = safe_div(reduce_days, days_in_year).saturating_mul(revenue);

    CashReleaseSimulation {
        reduce_days,
        revenue,
        daily_revenue,
        cash_release,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ten_day_release() {
        let sim = simulate_cash_release(dec!(10), dec!(36_500_000), dec!(365));
        assert_eq!(sim.daily_revenue, dec!(100_000));
        assert_eq!(sim.cash_release.round_dp(6), dec!(1_000_000));
    }

    #[test]
    fn test_zero_days_releases_nothing() {
        let sim = simulate_cash_release(Decimal::ZERO, dec!(20_000_000), dec!(365));
        assert_eq!(sim.cash_release, Decimal::ZERO);
    }
}
