//! Illustrative "AI" models trained on seeded synthetic data.
//!
//! Nothing here is a validated financial prediction. The synthetic data
//! distributions and seeds are explicit inputs so every run is reproducible,
//! and every envelope produced by this module carries a warning saying so.

pub mod cash_forecast;
pub mod receivables_risk;
pub mod synthetic;

use serde::{Deserialize, Serialize};

use crate::types::{ComputationMetadata, ComputationOutput};
use crate::WorkingCapitalResult;
use synthetic::SyntheticDataset;

pub const SYNTHETIC_WARNING: &str =
    "Demo model fitted on synthetic data; outputs are illustrative, not validated predictions.";

/// Result of fitting a demo model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitSummary {
    pub model: String,
    pub samples: usize,
    pub intercept: f64,
    /// One coefficient per feature, in dataset column order
    pub coefficients: Vec<f64>,
    /// "accuracy" for classifiers, "r_squared" for regressions
    pub training_metric_name: String,
    pub training_metric: f64,
}

/// A pluggable model over a [`SyntheticDataset`].
pub trait DemoRiskModel {
    fn name(&self) -> &str;

    fn fit(&mut self, data: &SyntheticDataset) -> WorkingCapitalResult<FitSummary>;

    /// Predict for one feature row; errors if the model is unfitted or the
    /// row has the wrong width.
    fn predict(&self, features: &[f64]) -> WorkingCapitalResult<f64>;
}

/// Build ComputationOutput without requiring Decimal
fn with_metadata_f64<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    mut warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    warnings.insert(0, SYNTHETIC_WARNING.to_string());
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "ieee754_f64".to_string(),
        },
    }
}
