use super::types::{display_number, FeatureImportance, RiskFactor, WhatIfScenario};
use crate::logic::features::layout::{self, EMPLOYMENT_SEASONAL, MASK, SOCIO_LOW};
use crate::logic::features::NormalizedFeatures;
use crate::logic::scoring::{overall_risk, JitterSource};

/// Max recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 5;

// Factor thresholds
const AGE_FACTOR: f64 = 50.0;
const WEEKLY_HOURS_FACTOR: f64 = 40.0;
const LOW_PROTECTION: f64 = 5.0;
const HIGH_CHEMICAL: f64 = 5.0;
const FALLBACK_RISK: f64 = 30.0;
const AGE_RECOMMENDATION: f64 = 55.0;

// What-if targets
const FULL_PROTECTION: f64 = 8.0;
const REDUCED_HOURS_PER_DAY: f64 = 6.0;
const CHEMICAL_REDUCTION: f64 = 5.0;

// Static illustrative ranking, independent of the request
static FEATURE_IMPORTANCE: [(&str, f64); 10] = [
    ("protection_score", 0.85),
    ("chemical_risk_score", 0.78),
    ("age", 0.72),
    ("has_respiratory_conditions", 0.65),
    ("work_hours_per_day", 0.58),
    ("work_experience", 0.52),
    ("socio_economic_status", 0.48),
    ("employment_status", 0.42),
    ("has_chronic_exposure", 0.38),
    ("has_skin_conditions", 0.35),
];

/// Risk factors in check order (not severity-ranked)
pub fn risk_factors(f: &NormalizedFeatures, overall_risk: f64) -> Vec<RiskFactor> {
    let mut factors = Vec::new();

    if f.age > AGE_FACTOR {
        factors.push(RiskFactor::AdvancedAge { age: f.age });
    }

    let hours_per_week = f.hours_per_week();
    if hours_per_week > WEEKLY_HOURS_FACTOR {
        factors.push(RiskFactor::LongWorkWeek { hours_per_week });
    }

    if f.protection_score < LOW_PROTECTION {
        factors.push(RiskFactor::InsufficientProtection);
    }
    if f.chemical_risk_score > HIGH_CHEMICAL {
        factors.push(RiskFactor::HighChemicalExposure);
    }

    if f.has_respiratory_conditions {
        factors.push(RiskFactor::RespiratoryCondition);
    }
    if f.has_skin_conditions {
        factors.push(RiskFactor::SkinCondition);
    }
    if f.has_chronic_exposure {
        factors.push(RiskFactor::ChronicExposure);
    }

    if f.socio_economic_status == SOCIO_LOW {
        factors.push(RiskFactor::LowSocioEconomicStatus);
    }
    if f.employment_status == EMPLOYMENT_SEASONAL {
        factors.push(RiskFactor::SeasonalEmployment);
    }

    if factors.is_empty() && overall_risk > FALLBACK_RISK {
        factors.push(RiskFactor::CombinedFactors);
    }

    factors
}

/// Personalized recommendations, first five in generation order
pub fn recommendations(f: &NormalizedFeatures, factors: &[RiskFactor]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    if factors.contains(&RiskFactor::InsufficientProtection) {
        out.push("Utiliser plus régulièrement des équipements de protection, particulièrement un masque et des gants".into());
    }
    if factors.contains(&RiskFactor::HighChemicalExposure) {
        out.push("Limiter l'exposition aux produits chimiques en suivant les instructions d'utilisation et en portant un équipement de protection approprié".into());
    }

    let hours_per_week = f.hours_per_week();
    if hours_per_week > WEEKLY_HOURS_FACTOR {
        out.push(format!(
            "Réduire les heures de travail hebdomadaires (actuellement {}h) pour limiter la fatigue et l'exposition",
            display_number(hours_per_week)
        ));
    }

    if f.has_respiratory_conditions {
        out.push("Consulter régulièrement un médecin pour le suivi des troubles respiratoires".into());
        out.push("Porter un masque de protection respiratoire adapté lors de l'utilisation de produits chimiques".into());
    }

    if f.has_skin_conditions {
        out.push("Utiliser des gants de protection pour éviter le contact direct avec les produits chimiques".into());
        out.push("Se laver soigneusement les mains et la peau exposée après le travail".into());
    }

    if f.age > AGE_RECOMMENDATION {
        out.push("Prévoir des pauses plus fréquentes pendant le travail".into());
        out.push("Éviter les tâches nécessitant des efforts physiques intenses".into());
    }

    if f.socio_economic_status == SOCIO_LOW {
        out.push("Se renseigner sur les programmes d'aide pour l'achat d'équipement de protection".into());
    }

    out.push("Maintenir une bonne hydratation pendant le travail, surtout par temps chaud".into());

    out.truncate(MAX_RECOMMENDATIONS);
    out
}

/// Counterfactual overall risks, one per applicable perturbation.
///
/// Each scenario is re-scored with a fresh jitter draw.
pub fn what_if_scenarios(f: &NormalizedFeatures, jitter: &dyn JitterSource) -> Vec<WhatIfScenario> {
    let mut scenarios = Vec::new();

    if f.protection_score < FULL_PROTECTION {
        let mut changed = f.clone();
        changed.protection_score = FULL_PROTECTION;
        scenarios.push(scenario("Avec protection complète", &changed, jitter));
    }

    if f.work_hours_per_day > REDUCED_HOURS_PER_DAY {
        let mut changed = f.clone();
        changed.work_hours_per_day = REDUCED_HOURS_PER_DAY;
        scenarios.push(scenario("Avec réduction des heures de travail", &changed, jitter));
    }

    if !f.has_equipment(MASK) {
        let mut changed = f.clone();
        changed.protective_equipment.push(MASK.to_string());
        let mask_share = layout::protection_effectiveness(MASK).unwrap_or(0.0) / layout::total_effectiveness() * 10.0;
        changed.protection_score = (f.protection_score + mask_share).min(10.0);
        scenarios.push(scenario("Avec masque respiratoire", &changed, jitter));
    }

    if f.chemical_risk_score > 0.0 {
        let mut changed = f.clone();
        changed.chemical_risk_score = (f.chemical_risk_score - CHEMICAL_REDUCTION).max(0.0);
        scenarios.push(scenario("Avec réduction de l'exposition chimique", &changed, jitter));
    }

    scenarios
}

fn scenario(label: &str, features: &NormalizedFeatures, jitter: &dyn JitterSource) -> WhatIfScenario {
    WhatIfScenario {
        label: label.to_string(),
        score: overall_risk(features, jitter),
    }
}

pub fn feature_importance() -> Vec<FeatureImportance> {
    FEATURE_IMPORTANCE
        .iter()
        .map(|&(feature, importance)| FeatureImportance {
            feature: feature.to_string(),
            importance,
        })
        .collect()
}
