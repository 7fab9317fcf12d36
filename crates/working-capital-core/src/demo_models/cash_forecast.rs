use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::synthetic::{generate_cash_history, CashHistoryConfig, SyntheticDataset};
use super::{with_metadata_f64, DemoRiskModel, FitSummary};
use crate::error::WorkingCapitalError;
use crate::types::ComputationOutput;
use crate::WorkingCapitalResult;

/// Ordinary least squares trend line through a single time feature.
#[derive(Debug, Clone, Default)]
pub struct CashForecastModel {
    intercept: f64,
    slope: f64,
    fitted: bool,
}

impl DemoRiskModel for CashForecastModel {
    fn name(&self) -> &str {
        "cash_linear_trend"
    }

    fn fit(&mut self, data: &SyntheticDataset) -> WorkingCapitalResult<FitSummary> {
        if data.width() != 1 {
            return Err(WorkingCapitalError::InvalidInput {
                field: "features".into(),
                reason: format!("Cash trend expects 1 feature, got {}", data.width()),
            });
        }
        if data.len() < 2 {
            return Err(WorkingCapitalError::InsufficientData(
                "At least two observations are needed for a trend.".into(),
            ));
        }

        let n = data.len() as f64;
        let xs: Vec<f64> = data.features.iter().map(|r| r[0]).collect();
        let x_mean = xs.iter().sum::<f64>() / n;
        let y_mean = data.targets.iter().sum::<f64>() / n;

        let sxx: f64 = xs.iter().map(|x| (x - x_mean).powi(2)).sum();
        if sxx < f64::EPSILON {
            return Err(WorkingCapitalError::ModelFit(
                "Time feature has no variance.".into(),
            ));
        }
        let sxy: f64 = xs
            .iter()
            .zip(data.targets.iter())
            .map(|(x, y)| (x - x_mean) * (y - y_mean))
            .sum();

        self.slope = sxy / sxx;
        self.intercept = y_mean - self.slope * x_mean;
        self.fitted = true;

        let ss_tot: f64 = data.targets.iter().map(|y| (y - y_mean).powi(2)).sum();
        let ss_res: f64 = xs
            .iter()
            .zip(data.targets.iter())
            .map(|(x, y)| (y - (self.intercept + self.slope * x)).powi(2))
            .sum();
        let r_squared = if ss_tot < f64::EPSILON {
            1.0
        } else {
            1.0 - ss_res / ss_tot
        };

        Ok(FitSummary {
            model: self.name().to_string(),
            samples: data.len(),
            intercept: self.intercept,
            coefficients: vec![self.slope],
            training_metric_name: "r_squared".into(),
            training_metric: r_squared,
        })
    }

    fn predict(&self, features: &[f64]) -> WorkingCapitalResult<f64> {
        if !self.fitted {
            return Err(WorkingCapitalError::ModelFit(
                "Cash model has not been fitted.".into(),
            ));
        }
        match features {
            [t] => Ok(self.intercept + self.slope * t),
            _ => Err(WorkingCapitalError::InvalidInput {
                field: "features".into(),
                reason: format!("Expected 1 feature, got {}", features.len()),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashForecastInput {
    #[serde(default)]
    pub data: CashHistoryConfig,
    #[serde(default = "default_months_ahead")]
    pub months_ahead: u32,
}

fn default_months_ahead() -> u32 {
    6
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashForecastPoint {
    /// Month index continuing from the synthetic history
    pub month: u32,
    pub predicted_cash: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashForecastOutput {
    pub fit: FitSummary,
    pub history: Vec<f64>,
    pub forecast: Vec<CashForecastPoint>,
}

/// Fit a trend to synthetic monthly cash balances and extend it.
pub fn forecast_cash(
    input: &CashForecastInput,
) -> WorkingCapitalResult<ComputationOutput<CashForecastOutput>> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    if input.months_ahead == 0 || input.months_ahead > 120 {
        return Err(WorkingCapitalError::InvalidInput {
            field: "months_ahead".into(),
            reason: "Forecast must cover between 1 and 120 months".into(),
        });
    }

    let data = generate_cash_history(&input.data)?;
    let mut model = CashForecastModel::default();
    let fit = model.fit(&data)?;
    if fit.training_metric < 0.5 {
        warnings.push(format!(
            "Weak trend fit (R² = {:.2}); noise dominates the synthetic history.",
            fit.training_metric
        ));
    }

    let first = data.len() as u32;
    let forecast = (first..first + input.months_ahead)
        .map(|month| {
            model.predict(&[month as f64]).map(|predicted_cash| CashForecastPoint {
                month,
                predicted_cash,
            })
        })
        .collect::<WorkingCapitalResult<Vec<_>>>()?;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata_f64(
        "Demo Cash Forecast (OLS trend, synthetic data)",
        &input.data,
        warnings,
        elapsed,
        CashForecastOutput {
            fit,
            history: data.targets,
            forecast,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noiseless_trend_recovered_exactly() {
        let cfg = CashHistoryConfig {
            noise_std: 0.0,
            ..Default::default()
        };
        let data = generate_cash_history(&cfg).unwrap();
        let mut model = CashForecastModel::default();
        let fit = model.fit(&data).unwrap();
        assert!((fit.coefficients[0] - 25_000.0).abs() < 1e-6);
        assert!((fit.intercept - 2_000_000.0).abs() < 1e-6);
        assert!((fit.training_metric - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_forecast_continues_month_index() {
        let out = forecast_cash(&CashForecastInput {
            data: CashHistoryConfig::default(),
            months_ahead: 3,
        })
        .unwrap();
        let months: Vec<u32> = out.result.forecast.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![24, 25, 26]);
        assert_eq!(out.result.history.len(), 24);
        assert!(out.result.forecast[2].predicted_cash > out.result.forecast[0].predicted_cash);
    }

    #[test]
    fn test_rejects_zero_months() {
        let input = CashForecastInput {
            data: CashHistoryConfig::default(),
            months_ahead: 0,
        };
        assert!(forecast_cash(&input).is_err());
    }

    #[test]
    fn test_wrong_width_prediction() {
        let mut model = CashForecastModel::default();
        model
            .fit(&generate_cash_history(&CashHistoryConfig::default()).unwrap())
            .unwrap();
        assert!(model.predict(&[1.0, 2.0]).is_err());
    }
}
