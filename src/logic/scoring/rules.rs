//! Scoring Rules & Constants
//!
//! Weights and thresholds of the heuristic risk formula.
//! No logic here - only constants.

// ============================================================================
// BOUNDS
// ============================================================================

pub const MIN_RISK: f64 = 0.0;
pub const MAX_RISK: f64 = 100.0;

/// Minimum risk before any factor is applied
pub const BASE_RISK: f64 = 20.0;

/// Half-width of the reported confidence interval
pub const CONFIDENCE_MARGIN: f64 = 5.0;

/// Default half-width of the uniform noise on the overall risk
pub const DEFAULT_JITTER_AMPLITUDE: f64 = 5.0;

// ============================================================================
// OVERALL RISK
// ============================================================================

pub const AGE_SENIOR: f64 = 50.0;
pub const AGE_MIDDLE: f64 = 40.0;
pub const AGE_SENIOR_PENALTY: f64 = 10.0;
pub const AGE_MIDDLE_PENALTY: f64 = 5.0;
/// Added per year above the tier threshold
pub const AGE_PER_YEAR: f64 = 0.5;

/// Added per unit of work intensity above a standard week
pub const WORK_INTENSITY_WEIGHT: f64 = 15.0;

pub const EXPERIENCE_THRESHOLD: f64 = 5.0;
/// Added per missing year below the experience threshold
pub const EXPERIENCE_PER_YEAR: f64 = 3.0;

/// protection_score 0-10 → 0-25 reduction
pub const PROTECTION_WEIGHT: f64 = 2.5;
/// chemical_risk_score 0-10 → 0-20 increase
pub const CHEMICAL_WEIGHT: f64 = 2.0;

pub const RESPIRATORY_CONDITION_PENALTY: f64 = 15.0;
pub const SKIN_CONDITION_PENALTY: f64 = 10.0;
pub const CHRONIC_EXPOSURE_PENALTY: f64 = 12.0;

pub const CHILDREN_THRESHOLD: f64 = 3.0;
pub const CHILDREN_PER_CHILD: f64 = 2.0;

pub const SOCIO_LOW_PENALTY: f64 = 10.0;
pub const SOCIO_MEDIUM_PENALTY: f64 = 5.0;
pub const SEASONAL_EMPLOYMENT_PENALTY: f64 = 8.0;

// ============================================================================
// ORGAN-SYSTEM RISKS
// ============================================================================

pub const RESPIRATORY_CONDITION_BONUS: f64 = 15.0;
pub const NO_MASK_BONUS: f64 = 10.0;
pub const RESPIRATORY_CHEMICAL_WEIGHT: f64 = 1.5;
pub const RESPIRATORY_AGE_ELDER: f64 = 60.0;
pub const RESPIRATORY_AGE_ELDER_BONUS: f64 = 8.0;
pub const RESPIRATORY_AGE_SENIOR_BONUS: f64 = 5.0;

pub const SKIN_OVERALL_FACTOR: f64 = 0.9;
pub const SKIN_CONDITION_BONUS: f64 = 20.0;
pub const NO_GLOVES_BONUS: f64 = 15.0;
pub const SKIN_CHEMICAL_WEIGHT: f64 = 1.2;

pub const NEURO_OVERALL_FACTOR: f64 = 0.8;
pub const NEURO_CHEMICAL_WEIGHT: f64 = 2.0;
pub const NEURO_CHRONIC_BONUS: f64 = 20.0;
pub const NEURO_AGE: f64 = 55.0;
pub const NEURO_AGE_BONUS: f64 = 10.0;
pub const NEURO_INTENSITY: f64 = 1.2;
pub const NEURO_INTENSITY_BONUS: f64 = 8.0;

pub fn clamp_risk(value: f64) -> f64 {
    value.clamp(MIN_RISK, MAX_RISK)
}
