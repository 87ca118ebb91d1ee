//! Keyword Dictionaries
//!
//! Fixed French vocabularies for the four keyword categories.
//! Each keyword carries a weight (severity for chemicals/tasks/health,
//! effectiveness for protection), 0-10.
//!
//! Declaration order is the extraction order: matches are reported in the
//! order listed here, never in text order.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// ============================================================================
// CATEGORY
// ============================================================================

/// Keyword category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCategory {
    Chemical,
    Task,
    Health,
    Protection,
}

impl KeywordCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordCategory::Chemical => "chemical",
            KeywordCategory::Task => "task",
            KeywordCategory::Health => "health",
            KeywordCategory::Protection => "protection",
        }
    }

    /// Parse a category name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "chemical" => Some(KeywordCategory::Chemical),
            "task" => Some(KeywordCategory::Task),
            "health" => Some(KeywordCategory::Health),
            "protection" => Some(KeywordCategory::Protection),
            _ => None,
        }
    }

    pub fn dictionary(&self) -> &'static KeywordDictionary {
        match self {
            KeywordCategory::Chemical => &CHEMICALS,
            KeywordCategory::Task => &TASKS,
            KeywordCategory::Health => &HEALTH,
            KeywordCategory::Protection => &PROTECTION,
        }
    }
}

impl std::fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// TABLES (authoritative source)
// ============================================================================

pub const CHEMICAL_KEYWORDS: &[(&str, u8)] = &[
    ("pesticides", 9),
    ("herbicides", 7),
    ("fongicides", 7),
    ("insecticides", 8),
    ("engrais chimiques", 6),
    ("engrais", 5),
    ("produits phytosanitaires", 8),
    ("produits chimiques", 7),
    ("roundup", 9),
    ("glyphosate", 9),
    ("désherbant", 7),
    ("fongicide", 7),
    ("insecticide", 8),
    ("pesticide", 9),
];

pub const TASK_KEYWORDS: &[(&str, u8)] = &[
    ("épandage", 8),
    ("traitement", 7),
    ("récolte", 4),
    ("désherbage", 6),
    ("taille", 3),
    ("plantation", 2),
    ("semis", 2),
    ("pulvérisation", 9),
    ("cueillette", 3),
    ("labour", 4),
    ("irrigation", 3),
    ("mélange des produits", 8),
    ("préparation des produits", 8),
];

pub const HEALTH_KEYWORDS: &[(&str, u8)] = &[
    ("respiratoire", 8),
    ("cutané", 7),
    ("peau", 7),
    ("asthme", 9),
    ("allergie", 6),
    ("toux", 7),
    ("irritation", 6),
    ("maux de tête", 5),
    ("céphalées", 5),
    ("vertiges", 7),
    ("nausées", 6),
    ("fatigue", 4),
    ("dyspnée", 8),
    ("difficulté à respirer", 9),
    ("problèmes respiratoires", 9),
    ("dermatite", 7),
    ("éruption cutanée", 7),
    ("irritation cutanée", 7),
    ("irritation des yeux", 6),
    ("problèmes neurologiques", 8),
    ("tremblements", 8),
    ("transpiration excessive", 5),
];

pub const PROTECTION_KEYWORDS: &[(&str, u8)] = &[
    ("masque", 9),
    ("gants", 8),
    ("bottes", 7),
    ("casquette", 5),
    ("mdhalla", 5),
    ("manteau", 6),
    ("imperméable", 6),
    ("lunettes", 7),
    ("protection respiratoire", 9),
    ("protection cutanée", 8),
    ("protection des yeux", 7),
    ("équipement de protection", 8),
    ("vêtements de protection", 7),
];

/// Health keywords that indicate a respiratory condition
pub const RESPIRATORY_HEALTH_TERMS: &[&str] = &[
    "asthme",
    "toux",
    "dyspnée",
    "difficulté à respirer",
    "problèmes respiratoires",
    "respiratoire",
];

/// Health keywords that indicate a skin condition
pub const SKIN_HEALTH_TERMS: &[&str] = &[
    "cutané",
    "peau",
    "dermatite",
    "éruption cutanée",
    "irritation cutanée",
];

// ============================================================================
// COMPILED DICTIONARIES
// ============================================================================

/// One dictionary entry with its precompiled whole-word pattern
#[derive(Debug)]
pub struct KeywordEntry {
    pub keyword: &'static str,
    pub weight: u8,
    pattern: Regex,
}

impl KeywordEntry {
    /// Whole-word match against already lower-cased text
    pub fn matches(&self, lowered: &str) -> bool {
        self.pattern.is_match(lowered)
    }

    /// Byte offset of the first whole-word match
    pub fn find(&self, lowered: &str) -> Option<usize> {
        self.pattern.find(lowered).map(|m| m.start())
    }
}

#[derive(Debug)]
pub struct KeywordDictionary {
    entries: Vec<KeywordEntry>,
}

impl KeywordDictionary {
    fn compile(table: &'static [(&'static str, u8)]) -> Self {
        let entries = table
            .iter()
            .filter_map(|&(keyword, weight)| {
                let pattern = format!(r"\b{}\b", regex::escape(keyword));
                Regex::new(&pattern)
                    .ok()
                    .map(|pattern| KeywordEntry { keyword, weight, pattern })
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

}

static CHEMICALS: Lazy<KeywordDictionary> = Lazy::new(|| KeywordDictionary::compile(CHEMICAL_KEYWORDS));
static TASKS: Lazy<KeywordDictionary> = Lazy::new(|| KeywordDictionary::compile(TASK_KEYWORDS));
static HEALTH: Lazy<KeywordDictionary> = Lazy::new(|| KeywordDictionary::compile(HEALTH_KEYWORDS));
static PROTECTION: Lazy<KeywordDictionary> = Lazy::new(|| KeywordDictionary::compile(PROTECTION_KEYWORDS));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_compiles() {
        assert_eq!(KeywordCategory::Chemical.dictionary().entries().len(), CHEMICAL_KEYWORDS.len());
        assert_eq!(KeywordCategory::Task.dictionary().entries().len(), TASK_KEYWORDS.len());
        assert_eq!(KeywordCategory::Health.dictionary().entries().len(), HEALTH_KEYWORDS.len());
        assert_eq!(KeywordCategory::Protection.dictionary().entries().len(), PROTECTION_KEYWORDS.len());
    }

    #[test]
    fn test_category_names_round_trip() {
        for name in ["chemical", "task", "health", "protection"] {
            let category = KeywordCategory::from_name(name).unwrap();
            assert_eq!(category.as_str(), name);
        }
        assert_eq!(KeywordCategory::from_name("weather"), None);
    }
}
