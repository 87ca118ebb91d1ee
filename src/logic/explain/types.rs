use serde::{Deserialize, Serialize};

/// Why a worker is at risk. Rendered to prose only at the response boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RiskFactor {
    AdvancedAge { age: f64 },
    LongWorkWeek { hours_per_week: f64 },
    InsufficientProtection,
    HighChemicalExposure,
    RespiratoryCondition,
    SkinCondition,
    ChronicExposure,
    LowSocioEconomicStatus,
    SeasonalEmployment,
    /// Fallback when no specific factor fires but the risk is still notable
    CombinedFactors,
}

impl RiskFactor {
    pub fn describe(&self) -> String {
        match self {
            RiskFactor::AdvancedAge { age } => {
                format!("Âge supérieur à 50 ans ({} ans)", display_number(*age))
            }
            RiskFactor::LongWorkWeek { hours_per_week } => format!(
                "Temps de travail élevé ({} heures par semaine)",
                display_number(*hours_per_week)
            ),
            RiskFactor::InsufficientProtection => {
                "Utilisation insuffisante d'équipement de protection".to_string()
            }
            RiskFactor::HighChemicalExposure => "Exposition élevée à des produits chimiques".to_string(),
            RiskFactor::RespiratoryCondition => {
                "Présence de troubles respiratoires préexistants".to_string()
            }
            RiskFactor::SkinCondition => "Antécédents de problèmes cutanés".to_string(),
            RiskFactor::ChronicExposure => "Exposition chronique aux produits agricoles".to_string(),
            RiskFactor::LowSocioEconomicStatus => {
                "Niveau socio-économique bas (accès limité aux ressources)".to_string()
            }
            RiskFactor::SeasonalEmployment => {
                "Statut d'emploi saisonnier (conditions de travail moins stables)".to_string()
            }
            RiskFactor::CombinedFactors => "Combinaison de facteurs de risque agricoles".to_string(),
        }
    }
}

impl std::fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatIfScenario {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

/// Whole numbers keep one decimal ("62.0"), others print as-is ("43.5")
pub fn display_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
