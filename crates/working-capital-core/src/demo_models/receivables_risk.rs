use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::synthetic::{generate_invoices, InvoiceDataConfig, SyntheticDataset};
use super::{with_metadata_f64, DemoRiskModel, FitSummary};
use crate::error::WorkingCapitalError;
use crate::types::ComputationOutput;
use crate::WorkingCapitalResult;

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// Logistic regression over standardised invoice features, fitted by batch
/// gradient descent.
#[derive(Debug, Clone)]
pub struct ReceivablesRiskModel {
    pub learning_rate: f64,
    pub iterations: u32,
    means: Vec<f64>,
    stds: Vec<f64>,
    intercept: f64,
    weights: Vec<f64>,
}

impl Default for ReceivablesRiskModel {
    fn default() -> Self {
        Self::new(0.1, 2_000)
    }
}

impl ReceivablesRiskModel {
    pub fn new(learning_rate: f64, iterations: u32) -> Self {
        Self {
            learning_rate,
            iterations,
            means: Vec::new(),
            stds: Vec::new(),
            intercept: 0.0,
            weights: Vec::new(),
        }
    }

    fn is_fitted(&self) -> bool {
        !self.weights.is_empty()
    }

    fn standardise(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .zip(self.means.iter().zip(self.stds.iter()))
            .map(|(x, (m, s))| (x - m) / s)
            .collect()
    }

    fn probability(&self, z_row: &[f64]) -> f64 {
        let z = self.intercept
            + z_row
                .iter()
                .zip(self.weights.iter())
                .map(|(x, w)| x * w)
                .sum::<f64>();
        sigmoid(z)
    }
}

impl DemoRiskModel for ReceivablesRiskModel {
    fn name(&self) -> &str {
        "receivables_logistic_regression"
    }

    fn fit(&mut self, data: &SyntheticDataset) -> WorkingCapitalResult<FitSummary> {
        if data.is_empty() {
            return Err(WorkingCapitalError::InsufficientData(
                "Cannot fit receivables model on an empty dataset.".into(),
            ));
        }
        if self.learning_rate <= 0.0 || self.iterations == 0 {
            return Err(WorkingCapitalError::InvalidInput {
                field: "learning_rate".into(),
                reason: "Learning rate and iterations must be positive".into(),
            });
        }

        let n = data.len() as f64;
        let width = data.width();

        // Column scaler
        self.means = (0..width)
            .map(|j| data.features.iter().map(|r| r[j]).sum::<f64>() / n)
            .collect();
        self.stds = (0..width)
            .map(|j| {
                let m = self.means[j];
                let var = data.features.iter().map(|r| (r[j] - m).powi(2)).sum::<f64>() / n;
                if var.sqrt() < f64::EPSILON {
                    1.0
                } else {
                    var.sqrt()
                }
            })
            .collect();
        let z_rows: Vec<Vec<f64>> = data.features.iter().map(|r| self.standardise(r)).collect();

        self.intercept = 0.0;
        self.weights = vec![0.0; width];

        for _ in 0..self.iterations {
            let mut grad_b = 0.0;
            let mut grad_w = vec![0.0; width];
            for (row, y) in z_rows.iter().zip(data.targets.iter()) {
                let err = self.probability(row) - y;
                grad_b += err;
                for (g, x) in grad_w.iter_mut().zip(row.iter()) {
                    *g += err * x;
                }
            }
            self.intercept -= self.learning_rate * grad_b / n;
            for (w, g) in self.weights.iter_mut().zip(grad_w.iter()) {
                *w -= self.learning_rate * g / n;
            }
        }

        if !self.intercept.is_finite() || self.weights.iter().any(|w| !w.is_finite()) {
            return Err(WorkingCapitalError::ModelFit(
                "Gradient descent diverged; lower the learning rate.".into(),
            ));
        }

        let correct = z_rows
            .iter()
            .zip(data.targets.iter())
            .filter(|(row, y)| (self.probability(row) >= 0.5) == (**y >= 0.5))
            .count();

        Ok(FitSummary {
            model: self.name().to_string(),
            samples: data.len(),
            intercept: self.intercept,
            coefficients: self.weights.clone(),
            training_metric_name: "accuracy".into(),
            training_metric: correct as f64 / n,
        })
    }

    fn predict(&self, features: &[f64]) -> WorkingCapitalResult<f64> {
        if !self.is_fitted() {
            return Err(WorkingCapitalError::ModelFit(
                "Receivables model has not been fitted.".into(),
            ));
        }
        if features.len() != self.weights.len() {
            return Err(WorkingCapitalError::InvalidInput {
                field: "features".into(),
                reason: format!(
                    "Expected {} features, got {}",
                    self.weights.len(),
                    features.len()
                ),
            });
        }
        Ok(self.probability(&self.standardise(features)))
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceToScore {
    #[serde(default)]
    pub reference: Option<String>,
    pub days_past_due: f64,
    pub amount: f64,
    #[serde(default)]
    pub prior_late_payments: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceivablesRiskInput {
    #[serde(default)]
    pub data: InvoiceDataConfig,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    pub invoices: Vec<InvoiceToScore>,
}

fn default_learning_rate() -> f64 {
    0.1
}

fn default_iterations() -> u32 {
    2_000
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceScore {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub default_probability: f64,
    pub risk_band: RiskBand,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceivablesRiskOutput {
    pub fit: FitSummary,
    pub scores: Vec<InvoiceScore>,
}

/// Fit the demo receivables model on a synthetic invoice book and score the
/// supplied invoices.
pub fn score_receivables_risk(
    input: &ReceivablesRiskInput,
) -> WorkingCapitalResult<ComputationOutput<ReceivablesRiskOutput>> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    if input.invoices.is_empty() {
        return Err(WorkingCapitalError::InsufficientData(
            "At least one invoice must be provided for scoring.".into(),
        ));
    }
    for (i, inv) in input.invoices.iter().enumerate() {
        if inv.amount <= 0.0 {
            return Err(WorkingCapitalError::InvalidInput {
                field: format!("invoices[{i}].amount"),
                reason: "Invoice amount must be positive".into(),
            });
        }
    }

    let data = generate_invoices(&input.data)?;
    let mut model = ReceivablesRiskModel::new(input.learning_rate, input.iterations);
    let fit = model.fit(&data)?;

    let mut scores = Vec::with_capacity(input.invoices.len());
    for inv in &input.invoices {
        if inv.days_past_due < 0.0 {
            warnings.push(format!(
                "Invoice {}: negative days past due scored as-is.",
                inv.reference.as_deref().unwrap_or("?")
            ));
        }
        let p = model.predict(&[inv.days_past_due, inv.amount.ln(), inv.prior_late_payments])?;
        scores.push(InvoiceScore {
            reference: inv.reference.clone(),
            default_probability: p,
            risk_band: band(p),
        });
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata_f64(
        "Demo Receivables Risk Scoring (logistic regression, synthetic data)",
        &input.data,
        warnings,
        elapsed,
        ReceivablesRiskOutput { fit, scores },
    ))
}

fn band(p: f64) -> RiskBand {
    if p < 0.3 {
        RiskBand::Low
    } else if p < 0.6 {
        RiskBand::Medium
    } else {
        RiskBand::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_learns_direction_of_days_past_due() {
        let data = generate_invoices(&InvoiceDataConfig::default()).unwrap();
        let mut model = ReceivablesRiskModel::default();
        let fit = model.fit(&data).unwrap();
        assert!(fit.coefficients[0] > 0.0);
        assert!(fit.training_metric > 0.5);

        let fresh = model.predict(&[0.0, 10.0, 0.0]).unwrap();
        let stale = model.predict(&[120.0, 10.0, 5.0]).unwrap();
        assert!(stale > fresh);
    }

    #[test]
    fn test_predict_before_fit_errors() {
        let model = ReceivablesRiskModel::default();
        assert!(matches!(
            model.predict(&[1.0, 2.0, 3.0]),
            Err(WorkingCapitalError::ModelFit(_))
        ));
    }

    #[test]
    fn test_fit_is_reproducible() {
        let data = generate_invoices(&InvoiceDataConfig::default()).unwrap();
        let a = ReceivablesRiskModel::default().fit(&data).unwrap();
        let b = ReceivablesRiskModel::default().fit(&data).unwrap();
        assert_eq!(a.coefficients, b.coefficients);
        assert_eq!(a.intercept, b.intercept);
    }

    #[test]
    fn test_envelope_carries_synthetic_warning() {
        let input = ReceivablesRiskInput {
            data: InvoiceDataConfig::default(),
            learning_rate: 0.1,
            iterations: 500,
            invoices: vec![InvoiceToScore {
                reference: Some("INV-1".into()),
                days_past_due: 45.0,
                amount: 25_000.0,
                prior_late_payments: 1.0,
            }],
        };
        let out = score_receivables_risk(&input).unwrap();
        assert_eq!(out.metadata.precision, "ieee754_f64");
        assert_eq!(out.warnings[0], super::super::SYNTHETIC_WARNING);
        let p = out.result.scores[0].default_probability;
        assert!((0.0..=1.0).contains(&p));
    }
}
