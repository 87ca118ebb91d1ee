//! Linear Regressor
//!
//! Least-squares linear model fitted by batch gradient descent on
//! standardized features. Persisted and reported, but scoring stays on the
//! heuristic formula.

use serde::{Deserialize, Serialize};

pub const LEARNING_RATE: f64 = 0.05;
pub const EPOCHS: usize = 2_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl LinearRegressor {
    pub fn fit(rows: &[Vec<f64>], targets: &[f64]) -> Self {
        Self::fit_with(rows, targets, LEARNING_RATE, EPOCHS)
    }

    pub fn fit_with(rows: &[Vec<f64>], targets: &[f64], learning_rate: f64, epochs: usize) -> Self {
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut model = Self {
            weights: vec![0.0; width],
            bias: 0.0,
        };
        if rows.is_empty() || rows.len() != targets.len() {
            return model;
        }

        let n = rows.len() as f64;
        for _ in 0..epochs {
            let mut grad_w = vec![0.0; width];
            let mut grad_b = 0.0;

            for (row, y) in rows.iter().zip(targets) {
                let err = model.predict_row(row) - y;
                for (g, x) in grad_w.iter_mut().zip(row) {
                    *g += 2.0 * err * x / n;
                }
                grad_b += 2.0 * err / n;
            }

            for (w, g) in model.weights.iter_mut().zip(&grad_w) {
                *w -= learning_rate * g;
            }
            model.bias -= learning_rate * grad_b;
        }

        model
    }

    pub fn is_fitted(&self) -> bool {
        !self.weights.is_empty()
    }

    pub fn predict_row(&self, row: &[f64]) -> f64 {
        self.bias + self.weights.iter().zip(row).map(|(w, x)| w * x).sum::<f64>()
    }

    /// Mean squared error over a labelled set (0.0 when empty)
    pub fn mse(&self, rows: &[Vec<f64>], targets: &[f64]) -> f64 {
        if rows.is_empty() {
            return 0.0;
        }
        rows.iter()
            .zip(targets)
            .map(|(row, y)| (self.predict_row(row) - y).powi(2))
            .sum::<f64>()
            / rows.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::model::scaler::StandardScaler;

    #[test]
    fn test_fits_a_line() {
        let raw: Vec<Vec<f64>> = (0..6).map(|i| vec![i as f64]).collect();
        let targets: Vec<f64> = raw.iter().map(|r| 2.0 * r[0] + 1.0).collect();

        let scaler = StandardScaler::fit(&raw);
        let model = LinearRegressor::fit(&scaler.transform(&raw), &targets);

        let predicted = model.predict_row(&scaler.transform_row(&[10.0]));
        assert!((predicted - 21.0).abs() < 1e-3, "predicted {}", predicted);
        assert!(model.mse(&scaler.transform(&raw), &targets) < 1e-6);
    }

    #[test]
    fn test_empty_input_gives_unfitted_model() {
        let model = LinearRegressor::fit(&[], &[]);
        assert!(!model.is_fitted());
        assert_eq!(model.mse(&[], &[]), 0.0);
    }
}
