//! Keyword & Structured Feature Extraction
//!
//! `extract`: whole-word keyword matching against a category dictionary.
//! `extract_structured_features`: regex extraction of survey fields from the
//! free-text description, layered with the four keyword categories.

use once_cell::sync::Lazy;
use regex::Regex;

use super::dictionary::{KeywordCategory, RESPIRATORY_HEALTH_TERMS, SKIN_HEALTH_TERMS};
use crate::logic::features::layout::{self, MARITAL_STATUS, SOCIO_ECONOMIC_STATUS};
use crate::logic::features::{FeatureInput, ItemList, NumericValue};

// ============================================================================
// PATTERNS
// ============================================================================

static AGE_RE: Lazy<Regex> = Lazy::new(|| compile(r"\b(\d{1,2})\s*ans\b"));
static EXPERIENCE_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"\b(\d{1,2})\s*ans?\s*d'(expérience|ancienneté)"));
static HOURS_RE: Lazy<Regex> = Lazy::new(|| compile(r"\b(\d{1,2})\s*heures?\s*(par jour|/jour)"));
static DAYS_RE: Lazy<Regex> = Lazy::new(|| compile(r"\b(\d)\s*(jours?|j)\s*(par semaine|/semaine)"));
static CHILDREN_RE: Lazy<Regex> = Lazy::new(|| compile(r"\b(\d{1,2})\s*enfants?\b"));
static DURATION_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"\b(depuis|pendant|il y a)\s+(\d+|plusieurs|longtemps)\s+(ans|années|mois)"));

/// Phrases that directly state chronic exposure
const CHRONIC_PHRASES: &[&str] = &["exposition chronique", "exposition prolongée"];

/// Employment statuses in lookup order
const EMPLOYMENT_LOOKUP: &[&str] = &["permanente", "saisonnière"];

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("extraction pattern is a valid literal")
}

// ============================================================================
// KEYWORDS
// ============================================================================

/// Keywords of `category` found as whole words in `text`, in dictionary order.
pub fn extract(text: &str, category: KeywordCategory) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let found: Vec<String> = category
        .dictionary()
        .entries()
        .iter()
        .filter(|entry| entry.matches(&lowered))
        .map(|entry| entry.keyword.to_string())
        .collect();

    tracing::debug!("Matched {} {} keywords", found.len(), category);
    found
}

/// `extract` by category name; unknown names match nothing.
pub fn extract_by_name(text: &str, category: &str) -> Vec<String> {
    match KeywordCategory::from_name(category) {
        Some(category) => extract(text, category),
        None => {
            tracing::debug!("Unknown keyword category: {}", category);
            Vec::new()
        }
    }
}

// ============================================================================
// STRUCTURED FEATURES
// ============================================================================

/// The five free-text survey answers
#[derive(Debug, Clone, Copy, Default)]
pub struct SurveyText<'a> {
    pub general_description: &'a str,
    pub chemicals_text: &'a str,
    pub tasks_text: &'a str,
    pub health_text: &'a str,
    pub protection_text: &'a str,
}

/// Pull a feature mapping out of free-text answers.
///
/// Every field is filled: patterns that do not match fall back to the
/// survey defaults.
pub fn extract_structured_features(text: &SurveyText<'_>) -> FeatureInput {
    let description = text.general_description.to_lowercase();
    let health_lowered = text.health_text.to_lowercase();

    let chemicals = extract(text.chemicals_text, KeywordCategory::Chemical);
    let tasks = extract(text.tasks_text, KeywordCategory::Task);
    let health = extract(text.health_text, KeywordCategory::Health);
    let protection = extract(text.protection_text, KeywordCategory::Protection);

    let has_respiratory = health.iter().any(|k| RESPIRATORY_HEALTH_TERMS.contains(&k.as_str()));
    let has_skin = health.iter().any(|k| SKIN_HEALTH_TERMS.contains(&k.as_str()));
    let has_chronic = CHRONIC_PHRASES.iter().any(|p| health_lowered.contains(p))
        || DURATION_RE.is_match(&health_lowered);

    FeatureInput {
        age: Some(capture_number(&AGE_RE, &description, layout::DEFAULT_AGE)),
        work_experience: Some(capture_number(&EXPERIENCE_RE, &description, layout::DEFAULT_WORK_EXPERIENCE)),
        work_hours_per_day: Some(capture_number(&HOURS_RE, &description, layout::DEFAULT_WORK_HOURS_PER_DAY)),
        work_days_per_week: Some(capture_number(&DAYS_RE, &description, layout::DEFAULT_WORK_DAYS_PER_WEEK)),
        number_of_children: Some(capture_number(&CHILDREN_RE, &description, layout::DEFAULT_NUMBER_OF_CHILDREN)),

        chemical_exposure_count: Some(chemicals.len().into()),
        chemical_exposure: Some(ItemList::Items(chemicals)),
        protective_equipment_count: Some(protection.len().into()),
        protective_equipment: Some(ItemList::Items(protection)),
        tasks,

        has_respiratory_conditions: Some(has_respiratory.into()),
        has_skin_conditions: Some(has_skin.into()),
        has_chronic_exposure: Some(has_chronic.into()),

        marital_status: Some(marital_status(&description)),
        socio_economic_status: Some(socio_economic_status(&description)),
        employment_status: Some(employment_status(&description)),
    }
}

fn capture_number(re: &Regex, text: &str, default: f64) -> NumericValue {
    re.captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(default)
        .into()
}

/// First declared marital status literally present, else "mariée"
fn marital_status(description: &str) -> String {
    MARITAL_STATUS
        .values()
        .find(|status| description.contains(status))
        .unwrap_or("mariée")
        .to_string()
}

/// "niveau socio-économique X" / "niveau économique X", else "moyen"
fn socio_economic_status(description: &str) -> String {
    SOCIO_ECONOMIC_STATUS
        .values()
        .find(|status| {
            description.contains(&format!("niveau socio-économique {}", status))
                || description.contains(&format!("niveau économique {}", status))
        })
        .unwrap_or("moyen")
        .to_string()
}

fn employment_status(description: &str) -> String {
    EMPLOYMENT_LOOKUP
        .iter()
        .copied()
        .find(|status| description.contains(status))
        .unwrap_or("permanente")
        .to_string()
}
