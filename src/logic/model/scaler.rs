//! Standard Scaler
//!
//! Per-column standardization `(x - mean) / scale` fitted on training rows.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Fit on row-major data. Zero-variance columns get scale 1.
    pub fn fit(rows: &[Vec<f64>]) -> Self {
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if rows.is_empty() {
            return Self::default();
        }

        let n = rows.len() as f64;
        let mut mean = vec![0.0; width];
        for row in rows {
            for (m, v) in mean.iter_mut().zip(row) {
                *m += v / n;
            }
        }

        let mut scale = vec![0.0; width];
        for row in rows {
            for ((s, v), m) in scale.iter_mut().zip(row).zip(&mean) {
                *s += (v - m).powi(2) / n;
            }
        }
        for s in scale.iter_mut() {
            *s = s.sqrt();
            if *s == 0.0 || !s.is_finite() {
                *s = 1.0;
            }
        }

        Self { mean, scale }
    }

    pub fn is_fitted(&self) -> bool {
        !self.mean.is_empty() && self.mean.len() == self.scale.len()
    }

    pub fn transform_row(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(v, (m, s))| (v - m) / s)
            .collect()
    }

    pub fn transform(&self, rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
        rows.iter().map(|r| self.transform_row(r)).collect()
    }
}
