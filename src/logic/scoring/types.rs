//! Scoring Types

use serde::{Deserialize, Serialize};

use super::rules::{clamp_risk, CONFIDENCE_MARGIN};

/// Overall and organ-system risks, each 0-100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskScores {
    pub overall: f64,
    pub respiratory: f64,
    pub skin: f64,
    pub neurological: f64,
}

impl RiskScores {
    /// `[overall - 5, overall + 5]`, clamped to 0-100
    pub fn confidence_interval(&self) -> [f64; 2] {
        [
            clamp_risk(self.overall - CONFIDENCE_MARGIN),
            clamp_risk(self.overall + CONFIDENCE_MARGIN),
        ]
    }
}
