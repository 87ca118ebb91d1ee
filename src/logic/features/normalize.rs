//! Feature Normalizer
//!
//! Converts a partial `FeatureInput` into the total, fixed-shape
//! `NormalizedFeatures`. Never fails: every gap is defaulted.

use serde::{Deserialize, Serialize};

use super::input::{FeatureInput, FlagValue, ItemList, NumericValue};
use super::layout::{
    self, EMPLOYMENT_STATUS, MARITAL_STATUS, SOCIO_ECONOMIC_STATUS,
};

/// Standard working week used to measure work intensity (hours)
pub const STANDARD_WEEK_HOURS: f64 = 35.0;

/// Canonical feature set consumed by the scorer and the explainer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedFeatures {
    pub age: f64,
    pub work_experience: f64,
    pub work_hours_per_day: f64,
    pub work_days_per_week: f64,
    pub protective_equipment_count: f64,
    pub chemical_exposure_count: f64,
    pub number_of_children: f64,

    pub has_respiratory_conditions: bool,
    pub has_skin_conditions: bool,
    pub has_chronic_exposure: bool,

    pub marital_status: u8,
    pub socio_economic_status: u8,
    pub employment_status: u8,

    /// Protective-equipment coverage, 0-10
    pub protection_score: f64,
    /// Hazardous-substance exposure, 0-10
    pub chemical_risk_score: f64,

    /// Equipment as listed (trimmed, lower-cased)
    pub protective_equipment: Vec<String>,
}

impl NormalizedFeatures {
    pub fn hours_per_week(&self) -> f64 {
        self.work_hours_per_day * self.work_days_per_week
    }

    /// Weekly hours relative to a standard 35h week
    pub fn work_intensity(&self) -> f64 {
        self.hours_per_week() / STANDARD_WEEK_HOURS
    }

    pub fn has_equipment(&self, item: &str) -> bool {
        self.protective_equipment.iter().any(|e| e == item)
    }
}

impl Default for NormalizedFeatures {
    fn default() -> Self {
        normalize(&FeatureInput::default())
    }
}

/// Normalize a partial feature mapping
pub fn normalize(input: &FeatureInput) -> NormalizedFeatures {
    let protective_equipment = input
        .protective_equipment
        .as_ref()
        .map(ItemList::cleaned)
        .unwrap_or_default();

    NormalizedFeatures {
        age: numeric(&input.age, "age", layout::DEFAULT_AGE),
        work_experience: numeric(&input.work_experience, "work_experience", layout::DEFAULT_WORK_EXPERIENCE),
        work_hours_per_day: numeric(&input.work_hours_per_day, "work_hours_per_day", layout::DEFAULT_WORK_HOURS_PER_DAY),
        work_days_per_week: numeric(&input.work_days_per_week, "work_days_per_week", layout::DEFAULT_WORK_DAYS_PER_WEEK),
        protective_equipment_count: numeric(
            &input.protective_equipment_count,
            "protective_equipment_count",
            layout::DEFAULT_PROTECTIVE_EQUIPMENT_COUNT,
        ),
        chemical_exposure_count: numeric(
            &input.chemical_exposure_count,
            "chemical_exposure_count",
            layout::DEFAULT_CHEMICAL_EXPOSURE_COUNT,
        ),
        number_of_children: numeric(&input.number_of_children, "number_of_children", layout::DEFAULT_NUMBER_OF_CHILDREN),

        has_respiratory_conditions: flag(&input.has_respiratory_conditions),
        has_skin_conditions: flag(&input.has_skin_conditions),
        has_chronic_exposure: flag(&input.has_chronic_exposure),

        marital_status: MARITAL_STATUS.code(input.marital_status.as_deref()),
        socio_economic_status: SOCIO_ECONOMIC_STATUS.code(input.socio_economic_status.as_deref()),
        employment_status: EMPLOYMENT_STATUS.code(input.employment_status.as_deref()),

        protection_score: input.protective_equipment.as_ref().map_or(0.0, protection_score),
        chemical_risk_score: input.chemical_exposure.as_ref().map_or(0.0, chemical_risk_score),

        protective_equipment,
    }
}

/// Effectiveness of recognized equipment over the total known effectiveness, scaled to 0-10
pub fn protection_score(equipment: &ItemList) -> f64 {
    let total: f64 = equipment
        .cleaned()
        .iter()
        .filter_map(|item| layout::protection_effectiveness(item))
        .sum();

    let max_possible = layout::total_effectiveness();
    if max_possible > 0.0 {
        (10.0 * total / max_possible).clamp(0.0, 10.0)
    } else {
        0.0
    }
}

/// Severity of recognized chemicals, scaled to 0-10.
///
/// The denominator is the summed severity of the first N declared
/// chemicals, N being the number of listed items (recognized or not).
pub fn chemical_risk_score(chemicals: &ItemList) -> f64 {
    if chemicals.is_empty() {
        return 0.0;
    }

    let total: f64 = chemicals
        .cleaned()
        .iter()
        .filter_map(|item| layout::chemical_severity(item))
        .sum();

    let max_possible = layout::leading_severity_sum(chemicals.len());
    if max_possible > 0.0 {
        (10.0 * total / max_possible).clamp(0.0, 10.0)
    } else {
        0.0
    }
}

fn numeric(value: &Option<NumericValue>, field: &str, default: f64) -> f64 {
    match value {
        Some(v) => v.as_f64().unwrap_or_else(|| {
            tracing::debug!("Unparseable value for {}: {:?}, using default {}", field, v, default);
            default
        }),
        None => default,
    }
}

fn flag(value: &Option<FlagValue>) -> bool {
    value.as_ref().map_or(false, FlagValue::is_truthy)
}
