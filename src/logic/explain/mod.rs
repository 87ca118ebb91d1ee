//! Explain Module
//!
//! Human-readable reasons, recommendations and what-if scenarios for a score.

pub mod engine;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::{feature_importance, recommendations, risk_factors, what_if_scenarios};
pub use types::{FeatureImportance, RiskFactor, WhatIfScenario};
