//! Risk Scorer
//!
//! Deterministic additive formula over `NormalizedFeatures`, plus one jitter
//! draw on the overall risk. Organ-system risks derive from the jittered
//! overall value.

use super::jitter::JitterSource;
use super::rules::*;
use super::types::RiskScores;
use crate::logic::features::layout::{EMPLOYMENT_SEASONAL, GLOVES, MASK, SOCIO_LOW, SOCIO_MEDIUM};
use crate::logic::features::NormalizedFeatures;

// ============================================================================
// OVERALL
// ============================================================================

/// Overall risk before jitter and clamping
pub fn base_risk(f: &NormalizedFeatures) -> f64 {
    let mut risk = BASE_RISK;

    if f.age > AGE_SENIOR {
        risk += AGE_SENIOR_PENALTY + (f.age - AGE_SENIOR) * AGE_PER_YEAR;
    } else if f.age > AGE_MIDDLE {
        risk += AGE_MIDDLE_PENALTY + (f.age - AGE_MIDDLE) * AGE_PER_YEAR;
    }

    let intensity = f.work_intensity();
    if intensity > 1.0 {
        risk += (intensity - 1.0) * WORK_INTENSITY_WEIGHT;
    }

    if f.work_experience < EXPERIENCE_THRESHOLD {
        risk += (EXPERIENCE_THRESHOLD - f.work_experience) * EXPERIENCE_PER_YEAR;
    }

    risk -= f.protection_score * PROTECTION_WEIGHT;
    risk += f.chemical_risk_score * CHEMICAL_WEIGHT;

    if f.has_respiratory_conditions {
        risk += RESPIRATORY_CONDITION_PENALTY;
    }
    if f.has_skin_conditions {
        risk += SKIN_CONDITION_PENALTY;
    }
    if f.has_chronic_exposure {
        risk += CHRONIC_EXPOSURE_PENALTY;
    }

    if f.number_of_children > CHILDREN_THRESHOLD {
        risk += (f.number_of_children - CHILDREN_THRESHOLD) * CHILDREN_PER_CHILD;
    }

    match f.socio_economic_status {
        SOCIO_LOW => risk += SOCIO_LOW_PENALTY,
        SOCIO_MEDIUM => risk += SOCIO_MEDIUM_PENALTY,
        _ => {}
    }

    if f.employment_status == EMPLOYMENT_SEASONAL {
        risk += SEASONAL_EMPLOYMENT_PENALTY;
    }

    risk
}

/// Overall risk: base formula + one jitter draw, clamped to 0-100
pub fn overall_risk(f: &NormalizedFeatures, jitter: &dyn JitterSource) -> f64 {
    clamp_risk(base_risk(f) + jitter.sample())
}

// ============================================================================
// ORGAN SYSTEMS
// ============================================================================

pub fn respiratory_risk(f: &NormalizedFeatures, overall: f64) -> f64 {
    let mut risk = overall;

    if f.has_respiratory_conditions {
        risk += RESPIRATORY_CONDITION_BONUS;
    }
    if !f.has_equipment(MASK) {
        risk += NO_MASK_BONUS;
    }

    risk += f.chemical_risk_score * RESPIRATORY_CHEMICAL_WEIGHT;

    if f.age > RESPIRATORY_AGE_ELDER {
        risk += RESPIRATORY_AGE_ELDER_BONUS;
    } else if f.age > AGE_SENIOR {
        risk += RESPIRATORY_AGE_SENIOR_BONUS;
    }

    clamp_risk(risk)
}

pub fn skin_risk(f: &NormalizedFeatures, overall: f64) -> f64 {
    let mut risk = overall * SKIN_OVERALL_FACTOR;

    if f.has_skin_conditions {
        risk += SKIN_CONDITION_BONUS;
    }
    if !f.has_equipment(GLOVES) {
        risk += NO_GLOVES_BONUS;
    }

    risk += f.chemical_risk_score * SKIN_CHEMICAL_WEIGHT;

    clamp_risk(risk)
}

pub fn neurological_risk(f: &NormalizedFeatures, overall: f64) -> f64 {
    let mut risk = overall * NEURO_OVERALL_FACTOR;

    risk += f.chemical_risk_score * NEURO_CHEMICAL_WEIGHT;

    if f.has_chronic_exposure {
        risk += NEURO_CHRONIC_BONUS;
    }
    if f.age > NEURO_AGE {
        risk += NEURO_AGE_BONUS;
    }
    if f.work_intensity() > NEURO_INTENSITY {
        risk += NEURO_INTENSITY_BONUS;
    }

    clamp_risk(risk)
}

/// Score all four risks from a single jitter draw
pub fn score(f: &NormalizedFeatures, jitter: &dyn JitterSource) -> RiskScores {
    let overall = overall_risk(f, jitter);
    RiskScores {
        overall,
        respiratory: respiratory_risk(f, overall),
        skin: skin_risk(f, overall),
        neurological: neurological_risk(f, overall),
    }
}
