//! Risk Model
//!
//! Scoring pipeline entry point: normalize, score, explain.
//! The persisted regressor and scaler ride along for reporting only.

use serde::{Deserialize, Serialize};

use super::regressor::LinearRegressor;
use super::scaler::StandardScaler;
use crate::logic::explain::{self, FeatureImportance, WhatIfScenario};
use crate::logic::features::{normalize, FeatureInput};
use crate::logic::scoring::{self, JitterSource};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Full prediction response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    pub overall_risk: f64,
    pub respiratory_risk: f64,
    pub skin_risk: f64,
    pub neurological_risk: f64,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub feature_importance: Vec<FeatureImportance>,
    pub confidence_interval: [f64; 2],
    pub what_if_scenarios: Vec<WhatIfScenario>,
}

/// Loaded model state, shared read-only between requests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskModel {
    pub regressor: LinearRegressor,
    pub scaler: StandardScaler,
    pub feature_names: Vec<String>,
}

// ============================================================================
// PREDICTION
// ============================================================================

impl RiskModel {
    pub fn new(regressor: LinearRegressor, scaler: StandardScaler, feature_names: Vec<String>) -> Self {
        Self {
            regressor,
            scaler,
            feature_names,
        }
    }

    /// True once artifacts from a training run are loaded
    pub fn is_trained(&self) -> bool {
        self.regressor.is_fitted() && self.scaler.is_fitted()
    }

    pub fn predict(&self, input: &FeatureInput, jitter: &dyn JitterSource) -> RiskResult {
        let features = normalize(input);
        let scores = scoring::score(&features, jitter);

        let factors = explain::risk_factors(&features, scores.overall);
        let recommendations = explain::recommendations(&features, &factors);
        let what_if_scenarios = explain::what_if_scenarios(&features, jitter);

        RiskResult {
            overall_risk: scores.overall,
            respiratory_risk: scores.respiratory,
            skin_risk: scores.skin,
            neurological_risk: scores.neurological,
            risk_factors: factors.iter().map(|f| f.describe()).collect(),
            recommendations,
            feature_importance: explain::feature_importance(),
            confidence_interval: scores.confidence_interval(),
            what_if_scenarios,
        }
    }
}
