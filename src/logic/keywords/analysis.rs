//! Exploratory Text Analysis
//!
//! Co-occurrence report over a single free text: which chemicals appear near
//! which health issues, illustrative correlations, and missing protection.
//! Independent from the scoring pipeline.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::dictionary::{KeywordCategory, KeywordEntry};

/// Max distance (characters) between a health issue and a chemical to pair them
pub const PROXIMITY_WINDOW: usize = 100;

/// Chemicals that call for respiratory protection
const MASK_REQUIRED_FOR: &[&str] = &["pesticides", "herbicides", "fongicides", "insecticides"];

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureFactor {
    pub exposure: String,
    pub health_issue: String,
    pub risk_score: u32,
    pub occurrence_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueCorrelation {
    pub health_issue: String,
    pub correlation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemicalCorrelation {
    pub chemical: String,
    pub associated_issues: Vec<IssueCorrelation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtectionGap {
    pub chemical: String,
    pub missing_protection: Vec<String>,
    pub recommendation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordSummary {
    pub chemicals: Vec<String>,
    pub tasks: Vec<String>,
    pub health_issues: Vec<String>,
    pub protection: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub factors: Vec<ExposureFactor>,
    pub correlations: Vec<ChemicalCorrelation>,
    pub protection_assessment: Vec<ProtectionGap>,
    pub keywords: KeywordSummary,
}

// ============================================================================
// ANALYSIS
// ============================================================================

/// Analyze `text` with the thread-local RNG for the illustrative correlations
pub fn analyze_text(text: &str) -> TextAnalysis {
    analyze_text_with(text, &mut rand::thread_rng())
}

pub fn analyze_text_with<R: Rng>(text: &str, rng: &mut R) -> TextAnalysis {
    if text.is_empty() {
        return TextAnalysis::default();
    }

    let lowered = text.to_lowercase();

    let chemicals = contained(&lowered, KeywordCategory::Chemical);
    let tasks = contained(&lowered, KeywordCategory::Task);
    let health_issues = contained(&lowered, KeywordCategory::Health);
    let protection = contained(&lowered, KeywordCategory::Protection);

    let mut factors = Vec::new();
    for health in &health_issues {
        for chemical in &chemicals {
            let (Some(health_pos), Some(chemical_pos)) =
                (char_position(health, &lowered), char_position(chemical, &lowered))
            else {
                continue;
            };

            if health_pos.abs_diff(chemical_pos) < PROXIMITY_WINDOW {
                let severity = u32::from(health.weight) + u32::from(chemical.weight);
                factors.push(ExposureFactor {
                    exposure: chemical.keyword.to_string(),
                    health_issue: health.keyword.to_string(),
                    risk_score: (severity * 5).min(100),
                    occurrence_count: 1,
                });
            }
        }
    }

    let mut correlations = Vec::new();
    for chemical in &chemicals {
        let mut issues: Vec<IssueCorrelation> = health_issues
            .iter()
            .map(|health| IssueCorrelation {
                health_issue: health.keyword.to_string(),
                correlation: (rng.gen_range(0.3..=0.9_f64) * 100.0).round() / 100.0,
            })
            .collect();

        issues.sort_by(|a, b| b.correlation.partial_cmp(&a.correlation).unwrap_or(std::cmp::Ordering::Equal));
        issues.truncate(3);

        if !issues.is_empty() {
            correlations.push(ChemicalCorrelation {
                chemical: chemical.keyword.to_string(),
                associated_issues: issues,
            });
        }
    }

    let protection_names: Vec<&str> = protection.iter().map(|p| p.keyword).collect();
    let mut protection_assessment = Vec::new();
    if !protection_names.is_empty() {
        for chemical in &chemicals {
            let mut appropriate = Vec::new();
            if MASK_REQUIRED_FOR.contains(&chemical.keyword) {
                appropriate.push("masque");
            }
            appropriate.extend(["gants", "bottes"]);

            let missing: Vec<String> = appropriate
                .into_iter()
                .filter(|p| !protection_names.contains(p))
                .map(str::to_string)
                .collect();

            if !missing.is_empty() {
                protection_assessment.push(ProtectionGap {
                    chemical: chemical.keyword.to_string(),
                    recommendation: format!(
                        "Ajouter {} lors de l'utilisation de {}",
                        missing.join(", "),
                        chemical.keyword
                    ),
                    missing_protection: missing,
                });
            }
        }
    }

    TextAnalysis {
        factors,
        correlations,
        protection_assessment,
        keywords: KeywordSummary {
            chemicals: names(&chemicals),
            tasks: names(&tasks),
            health_issues: names(&health_issues),
            protection: protection_names.iter().map(|s| s.to_string()).collect(),
        },
    }
}

/// Dictionary entries contained anywhere in the text (plain substring)
fn contained(lowered: &str, category: KeywordCategory) -> Vec<&'static KeywordEntry> {
    category
        .dictionary()
        .entries()
        .iter()
        .filter(|entry| lowered.contains(entry.keyword))
        .collect()
}

/// Character index of the first whole-word occurrence
fn char_position(entry: &KeywordEntry, lowered: &str) -> Option<usize> {
    entry.find(lowered).map(|byte| lowered[..byte].chars().count())
}

fn names(entries: &[&KeywordEntry]) -> Vec<String> {
    entries.iter().map(|e| e.keyword.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn analyze(text: &str) -> TextAnalysis {
        analyze_text_with(text, &mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(analyze(""), TextAnalysis::default());
    }

    #[test]
    fn test_nearby_pairs_become_factors() {
        let report = analyze("Après les pesticides, une toux persistante.");

        assert_eq!(report.keywords.chemicals, vec!["pesticides", "pesticide"]);
        assert_eq!(report.keywords.health_issues, vec!["toux"]);

        // "pesticide" only occurs inside "pesticides": no whole-word position
        assert_eq!(report.factors.len(), 1);
        let factor = &report.factors[0];
        assert_eq!(factor.exposure, "pesticides");
        assert_eq!(factor.health_issue, "toux");
        assert_eq!(factor.risk_score, 80);
        assert_eq!(factor.occurrence_count, 1);
    }

    #[test]
    fn test_distant_pairs_are_ignored() {
        let filler = "x".repeat(120);
        let report = analyze(&format!("herbicides {} vertiges", filler));
        assert!(report.factors.is_empty());
        assert_eq!(report.correlations.len(), 1);
    }

    #[test]
    fn test_correlations_are_bounded_sorted_and_capped() {
        let report = analyze("glyphosate: toux, vertiges, nausées, fatigue, asthme");
        assert_eq!(report.correlations.len(), 1);

        let issues = &report.correlations[0].associated_issues;
        assert_eq!(issues.len(), 3);
        for pair in issues.windows(2) {
            assert!(pair[0].correlation >= pair[1].correlation);
        }
        for issue in issues {
            assert!((0.3..=0.9).contains(&issue.correlation));
        }
    }

    #[test]
    fn test_protection_assessment() {
        let report = analyze("insecticides et engrais, je porte des gants");

        // "insecticide" is also contained in "insecticides"
        assert_eq!(report.protection_assessment.len(), 3);
        let insecticides = &report.protection_assessment[0];
        assert_eq!(insecticides.chemical, "insecticides");
        assert_eq!(insecticides.missing_protection, vec!["masque", "bottes"]);
        assert_eq!(
            insecticides.recommendation,
            "Ajouter masque, bottes lors de l'utilisation de insecticides"
        );

        let engrais = &report.protection_assessment[1];
        assert_eq!(engrais.chemical, "engrais");
        assert_eq!(engrais.missing_protection, vec!["bottes"]);

        let singular = &report.protection_assessment[2];
        assert_eq!(singular.chemical, "insecticide");
        assert_eq!(singular.missing_protection, vec!["bottes"]);
    }

    #[test]
    fn test_no_assessment_without_protection() {
        let report = analyze("pesticides tous les jours");
        assert!(report.protection_assessment.is_empty());
    }
}
