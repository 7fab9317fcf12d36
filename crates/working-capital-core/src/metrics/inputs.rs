use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::WorkingCapitalError;
use crate::types::{Money, Rate};
use crate::WorkingCapitalResult;

/// Largest accepted amount (one quintillion). Keeps every sum, ratio and
/// projection derived from the inputs inside Decimal range.
pub const MAX_AMOUNT: Money = dec!(1_000_000_000_000_000_000);

/// Balance-sheet and income-statement figures entered for one company.
///
/// The calculator accepts any values, including negatives, and propagates
/// them arithmetically. Callers that need rejection run [`FinancialInputs::validate`]
/// first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialInputs {
    /// Annual revenue
    pub revenue: Money,
    /// Annual cost of goods sold
    pub cogs: Money,
    pub cash: Money,
    /// Accounts receivable
    pub receivables: Money,
    pub inventory: Money,
    /// Prepaid expenses and other current assets
    #[serde(default)]
    pub other_current_assets: Money,
    /// Accounts payable
    pub payables: Money,
    #[serde(default)]
    pub short_term_debt: Money,
    /// Accruals and other current liabilities
    #[serde(default)]
    pub other_current_liabilities: Money,
    /// Total funded debt, for debt service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_debt: Option<Money>,
    /// Interest rate on total debt (0.07 = 7%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Rate>,
    /// Scheduled annual principal repayment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_payment: Option<Money>,
    /// EBITDA as a fraction of revenue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ebitda_margin: Option<Rate>,
}

impl Default for FinancialInputs {
    /// The reference company used throughout the dashboards and tests.
    fn default() -> Self {
        Self {
            revenue: dec!(20_000_000),
            cogs: dec!(14_000_000),
            cash: dec!(2_000_000),
            receivables: dec!(5_000_000),
            inventory: dec!(3_000_000),
            other_current_assets: dec!(500_000),
            payables: dec!(3_500_000),
            short_term_debt: dec!(1_500_000),
            other_current_liabilities: dec!(400_000),
            total_debt: None,
            interest_rate: None,
            principal_payment: None,
            ebitda_margin: None,
        }
    }
}

impl FinancialInputs {
    /// Validation layer in front of the pure engine: every amount must lie in
    /// [0, `MAX_AMOUNT`] and the two fractional fields must lie in [0, 1].
    pub fn validate(&self) -> WorkingCapitalResult<()> {
        let required = [
            ("revenue", self.revenue),
            ("cogs", self.cogs),
            ("cash", self.cash),
            ("receivables", self.receivables),
            ("inventory", self.inventory),
            ("other_current_assets", self.other_current_assets),
            ("payables", self.payables),
            ("short_term_debt", self.short_term_debt),
            ("other_current_liabilities", self.other_current_liabilities),
        ];
        for (field, value) in required {
            check_non_negative(field, value)?;
        }

        if let Some(v) = self.total_debt {
            check_non_negative("total_debt", v)?;
        }
        if let Some(v) = self.principal_payment {
            check_non_negative("principal_payment", v)?;
        }
        if let Some(v) = self.interest_rate {
            check_fraction("interest_rate", v)?;
        }
        if let Some(v) = self.ebitda_margin {
            check_fraction("ebitda_margin", v)?;
        }
        Ok(())
    }

    /// True when the debt-service fields needed for DSCR are all present.
    pub fn has_debt_service_data(&self) -> bool {
        self.total_debt.is_some()
            && self.interest_rate.is_some()
            && self.principal_payment.is_some()
            && self.ebitda_margin.is_some()
    }
}

fn check_non_negative(field: &str, value: Decimal) -> WorkingCapitalResult<()> {
    if value < Decimal::ZERO {
        return Err(WorkingCapitalError::InvalidInput {
            field: field.into(),
            reason: format!("must be non-negative, got {value}"),
        });
    }
    if value > MAX_AMOUNT {
        return Err(WorkingCapitalError::InvalidInput {
            field: field.into(),
            reason: format!("must not exceed {MAX_AMOUNT}, got {value}"),
        });
    }
    Ok(())
}

fn check_fraction(field: &str, value: Decimal) -> WorkingCapitalResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(WorkingCapitalError::InvalidInput {
            field: field.into(),
            reason: format!("must be a fraction between 0 and 1, got {value}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_fixture_is_valid() {
        assert!(FinancialInputs::default().validate().is_ok());
    }

    #[test]
    fn test_negative_revenue_rejected() {
        let input = FinancialInputs {
            revenue: dec!(-1),
            ..Default::default()
        };
        match input.validate() {
            Err(WorkingCapitalError::InvalidInput { field, .. }) => assert_eq!(field, "revenue"),
            other => panic!("Expected InvalidInput for revenue, got {other:?}"),
        }
    }

    #[test]
    fn test_amount_beyond_ceiling_rejected() {
        let input = FinancialInputs {
            revenue: dec!(0.0001),
            receivables: dec!(10_000_000_000_000_000_000_000_000_000),
            ..Default::default()
        };
        match input.validate() {
            Err(WorkingCapitalError::InvalidInput { field, .. }) => {
                assert_eq!(field, "receivables")
            }
            other => panic!("Expected InvalidInput for receivables, got {other:?}"),
        }

        let at_ceiling = FinancialInputs {
            cash: MAX_AMOUNT,
            ..Default::default()
        };
        assert!(at_ceiling.validate().is_ok());
    }

    #[test]
    fn test_interest_rate_above_one_rejected() {
        let input = FinancialInputs {
            interest_rate: Some(dec!(7)),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_optional_fields_default_when_missing() {
        let json = r#"{
            "revenue": 1000, "cogs": 600, "cash": 50,
            "receivables": 100, "inventory": 80, "payables": 70
        }"#;
        let input: FinancialInputs = serde_json::from_str(json).unwrap();
        assert_eq!(input.other_current_assets, Decimal::ZERO);
        assert_eq!(input.short_term_debt, Decimal::ZERO);
        assert!(input.total_debt.is_none());
        assert!(!input.has_debt_service_data());
    }
}
