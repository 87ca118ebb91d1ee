//! Explanation tests

use super::engine::{feature_importance, recommendations, risk_factors, what_if_scenarios, MAX_RECOMMENDATIONS};
use super::types::{display_number, RiskFactor};
use crate::logic::features::{normalize, FeatureInput, FlagValue, ItemList, NormalizedFeatures, NumericValue};
use crate::logic::scoring::{base_risk, FixedJitter};

const EPS: f64 = 1e-9;
const HYDRATION: &str = "Maintenir une bonne hydratation pendant le travail, surtout par temps chaud";

fn survey_defaults() -> NormalizedFeatures {
    normalize(&FeatureInput {
        age: Some(NumericValue::Number(40.0)),
        work_experience: Some(NumericValue::Number(10.0)),
        work_hours_per_day: Some(NumericValue::Number(8.0)),
        work_days_per_week: Some(NumericValue::Number(5.0)),
        socio_economic_status: Some("moyen".into()),
        employment_status: Some("permanente".into()),
        protective_equipment: Some(ItemList::Items(vec![])),
        chemical_exposure: Some(ItemList::Items(vec![])),
        ..Default::default()
    })
}

fn high_risk_worker() -> NormalizedFeatures {
    normalize(&FeatureInput {
        age: Some(NumericValue::Number(62.0)),
        work_experience: Some(NumericValue::Number(3.0)),
        work_hours_per_day: Some(NumericValue::Number(10.0)),
        work_days_per_week: Some(NumericValue::Number(6.0)),
        protective_equipment: Some(ItemList::Items(vec![])),
        chemical_exposure: Some(ItemList::Items(vec!["pesticides".into(), "herbicides".into()])),
        has_respiratory_conditions: Some(FlagValue::Bool(true)),
        socio_economic_status: Some("moyen".into()),
        employment_status: Some("permanente".into()),
        ..Default::default()
    })
}

fn well_protected() -> NormalizedFeatures {
    let mut f = survey_defaults();
    f.protection_score = 10.0;
    f.protective_equipment = vec!["masque".into(), "gants".into()];
    f
}

// ============================================================================
// RISK FACTORS
// ============================================================================

#[test]
fn test_defaults_flag_only_protection() {
    let f = survey_defaults();
    assert_eq!(risk_factors(&f, 27.0), vec![RiskFactor::InsufficientProtection]);
}

#[test]
fn test_high_risk_factors_in_check_order() {
    let f = high_risk_worker();
    let factors = risk_factors(&f, 92.7);

    assert_eq!(
        factors,
        vec![
            RiskFactor::AdvancedAge { age: 62.0 },
            RiskFactor::LongWorkWeek { hours_per_week: 60.0 },
            RiskFactor::InsufficientProtection,
            RiskFactor::HighChemicalExposure,
            RiskFactor::RespiratoryCondition,
        ]
    );
    assert_eq!(factors[0].describe(), "Âge supérieur à 50 ans (62.0 ans)");
    assert_eq!(factors[1].to_string(), "Temps de travail élevé (60.0 heures par semaine)");
}

#[test]
fn test_social_factors() {
    let mut f = survey_defaults();
    f.socio_economic_status = 0;
    f.employment_status = 0;
    f.has_chronic_exposure = true;

    let factors = risk_factors(&f, 50.0);
    assert!(factors.contains(&RiskFactor::ChronicExposure));
    assert!(factors.contains(&RiskFactor::LowSocioEconomicStatus));
    assert_eq!(factors.last(), Some(&RiskFactor::SeasonalEmployment));
}

#[test]
fn test_fallback_factor_only_above_threshold() {
    let f = well_protected();
    assert_eq!(risk_factors(&f, 35.0), vec![RiskFactor::CombinedFactors]);
    assert!(risk_factors(&f, 30.0).is_empty());
    assert_eq!(
        RiskFactor::CombinedFactors.describe(),
        "Combinaison de facteurs de risque agricoles"
    );
}

#[test]
fn test_display_number() {
    assert_eq!(display_number(62.0), "62.0");
    assert_eq!(display_number(43.5), "43.5");
}

// ============================================================================
// RECOMMENDATIONS
// ============================================================================

#[test]
fn test_defaults_recommendations() {
    let f = survey_defaults();
    let recs = recommendations(&f, &risk_factors(&f, 27.0));

    assert_eq!(recs.len(), 2);
    assert!(recs[0].starts_with("Utiliser plus régulièrement des équipements de protection"));
    assert_eq!(recs[1], HYDRATION);
}

#[test]
fn test_recommendations_capped_in_generation_order() {
    let f = high_risk_worker();
    let recs = recommendations(&f, &risk_factors(&f, 92.7));

    assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
    assert!(recs[1].starts_with("Limiter l'exposition aux produits chimiques"));
    assert_eq!(
        recs[2],
        "Réduire les heures de travail hebdomadaires (actuellement 60.0h) pour limiter la fatigue et l'exposition"
    );
    assert!(recs[3].starts_with("Consulter régulièrement un médecin"));
    assert!(!recs.iter().any(|r| r == HYDRATION));
}

#[test]
fn test_hydration_always_when_room() {
    let f = well_protected();
    assert_eq!(recommendations(&f, &[]), vec![HYDRATION.to_string()]);
}

#[test]
fn test_elder_and_low_income_recommendations() {
    let mut f = well_protected();
    f.age = 58.0;
    f.socio_economic_status = 0;

    let recs = recommendations(&f, &risk_factors(&f, 40.0));
    assert_eq!(recs[0], "Prévoir des pauses plus fréquentes pendant le travail");
    assert_eq!(recs[1], "Éviter les tâches nécessitant des efforts physiques intenses");
    assert!(recs[2].starts_with("Se renseigner sur les programmes d'aide"));
    assert_eq!(recs[3], HYDRATION);
}

// ============================================================================
// WHAT-IF
// ============================================================================

#[test]
fn test_what_if_for_defaults() {
    let f = survey_defaults();
    let base = base_risk(&f);
    let scenarios = what_if_scenarios(&f, &FixedJitter(0.0));

    let labels: Vec<_> = scenarios.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Avec protection complète",
            "Avec réduction des heures de travail",
            "Avec masque respiratoire",
        ]
    );

    assert!((scenarios[0].score - (base - 20.0)).abs() < EPS);
    // 30h week is below the standard week, so no intensity term
    assert!((scenarios[1].score - 25.0).abs() < EPS);
    assert!((scenarios[2].score - (base - 9.0 / 35.0 * 10.0 * 2.5)).abs() < EPS);
}

#[test]
fn test_what_if_chemical_reduction_floors_at_zero() {
    let mut f = well_protected();
    f.work_hours_per_day = 6.0;
    f.chemical_risk_score = 3.0;

    let scenarios = what_if_scenarios(&f, &FixedJitter(0.0));
    assert_eq!(scenarios.len(), 1);
    assert_eq!(scenarios[0].label, "Avec réduction de l'exposition chimique");

    let mut reduced = f.clone();
    reduced.chemical_risk_score = 0.0;
    assert!((scenarios[0].score - base_risk(&reduced).clamp(0.0, 100.0)).abs() < EPS);
}

#[test]
fn test_what_if_scores_in_range() {
    let f = high_risk_worker();
    for s in what_if_scenarios(&f, &FixedJitter(5.0)) {
        assert!((0.0..=100.0).contains(&s.score));
    }
}

#[test]
fn test_feature_importance_is_static() {
    let ranking = feature_importance();
    assert_eq!(ranking.len(), 10);
    assert_eq!(ranking[0].feature, "protection_score");
    assert_eq!(ranking[0].importance, 0.85);
    assert!(ranking.windows(2).all(|w| w[0].importance >= w[1].importance));
    assert_eq!(ranking, feature_importance());
}
