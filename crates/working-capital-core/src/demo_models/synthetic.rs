use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use statrs::distribution::{LogNormal, Normal, Uniform};

use crate::error::WorkingCapitalError;
use crate::WorkingCapitalResult;

/// Feature matrix plus targets, one row per sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticDataset {
    pub feature_names: Vec<String>,
    pub features: Vec<Vec<f64>>,
    pub targets: Vec<f64>,
}

impl SyntheticDataset {
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn width(&self) -> usize {
        self.feature_names.len()
    }
}

/// Distribution of the fabricated invoice book used by the receivables model.
///
/// Labels are drawn from a logistic link over the features using
/// `true_intercept` and `true_coefficients`
/// (days past due, ln amount, prior late payments).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceDataConfig {
    pub seed: u64,
    pub samples: usize,
    pub days_past_due_mean: f64,
    pub days_past_due_std: f64,
    /// Location of ln(amount)
    pub amount_log_mu: f64,
    pub amount_log_sigma: f64,
    pub max_prior_late_payments: f64,
    pub true_intercept: f64,
    pub true_coefficients: [f64; 3],
}

impl Default for InvoiceDataConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            samples: 500,
            days_past_due_mean: 30.0,
            days_past_due_std: 20.0,
            amount_log_mu: 10.0,
            amount_log_sigma: 1.0,
            max_prior_late_payments: 6.0,
            true_intercept: -6.0,
            true_coefficients: [0.06, 0.25, 0.45],
        }
    }
}

/// Distribution of the fabricated monthly cash balances used by the cash model:
/// `base_cash + monthly_trend * t + N(0, noise_std)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CashHistoryConfig {
    pub seed: u64,
    pub months: usize,
    pub base_cash: f64,
    pub monthly_trend: f64,
    pub noise_std: f64,
}

impl Default for CashHistoryConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            months: 24,
            base_cash: 2_000_000.0,
            monthly_trend: 25_000.0,
            noise_std: 50_000.0,
        }
    }
}

/// Fabricate an invoice book: features are
/// `[days_past_due, ln(amount), prior_late_payments]`, targets are 1.0 for
/// invoices that defaulted.
pub fn generate_invoices(config: &InvoiceDataConfig) -> WorkingCapitalResult<SyntheticDataset> {
    if config.samples < 10 {
        return Err(WorkingCapitalError::InvalidInput {
            field: "samples".into(),
            reason: "At least 10 synthetic invoices are required".into(),
        });
    }

    let dpd = Normal::new(config.days_past_due_mean, config.days_past_due_std)
        .map_err(|e| invalid("days_past_due_std", format!("Invalid Normal parameters: {e}")))?;
    let amount = LogNormal::new(config.amount_log_mu, config.amount_log_sigma)
        .map_err(|e| invalid("amount_log_sigma", format!("Invalid LogNormal parameters: {e}")))?;
    let late = Uniform::new(0.0, config.max_prior_late_payments)
        .map_err(|e| invalid("max_prior_late_payments", format!("Invalid Uniform parameters: {e}")))?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut features = Vec::with_capacity(config.samples);
    let mut targets = Vec::with_capacity(config.samples);

    for _ in 0..config.samples {
        let days_past_due = rng.sample::<f64, _>(&dpd).max(0.0);
        let log_amount = rng.sample::<f64, _>(&amount).ln();
        let prior_late = rng.sample::<f64, _>(&late).floor();
        let row = vec![days_past_due, log_amount, prior_late];

        let z = config.true_intercept
            + row
                .iter()
                .zip(config.true_coefficients.iter())
                .map(|(x, b)| x * b)
                .sum::<f64>();
        let p = 1.0 / (1.0 + (-z).exp());
        targets.push(if rng.gen::<f64>() < p { 1.0 } else { 0.0 });
        features.push(row);
    }

    Ok(SyntheticDataset {
        feature_names: vec![
            "days_past_due".into(),
            "log_amount".into(),
            "prior_late_payments".into(),
        ],
        features,
        targets,
    })
}

/// Fabricate a monthly cash history: the single feature is the month index.
pub fn generate_cash_history(config: &CashHistoryConfig) -> WorkingCapitalResult<SyntheticDataset> {
    if config.months < 3 {
        return Err(WorkingCapitalError::InvalidInput {
            field: "months".into(),
            reason: "At least 3 months of synthetic history are required".into(),
        });
    }
    // A zero standard deviation yields an exact trend line.
    let noise = if config.noise_std == 0.0 {
        None
    } else {
        Some(
            Normal::new(0.0, config.noise_std)
                .map_err(|e| invalid("noise_std", format!("Invalid Normal parameters: {e}")))?,
        )
    };

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut features = Vec::with_capacity(config.months);
    let mut targets = Vec::with_capacity(config.months);
    for month in 0..config.months {
        let t = month as f64;
        features.push(vec![t]);
        let shock = noise.as_ref().map(|n| rng.sample::<f64, _>(n)).unwrap_or(0.0);
        targets.push(config.base_cash + config.monthly_trend * t + shock);
    }

    Ok(SyntheticDataset {
        feature_names: vec!["month".into()],
        features,
        targets,
    })
}

fn invalid(field: &str, reason: String) -> WorkingCapitalError {
    WorkingCapitalError::InvalidInput {
        field: field.into(),
        reason,
    }
}
