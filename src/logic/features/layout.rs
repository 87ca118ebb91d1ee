//! Feature Layout - Defaults, Enumerations and Weight Tables
//!
//! Single source of truth for:
//! - default values applied to missing fields
//! - ordinal codes of the categorical fields
//! - chemical severity and protective-equipment effectiveness weights
//!
//! Table order is significant (first categorical code is the fallback,
//! chemical severity order drives the normalization denominator).

// ============================================================================
// NUMERIC DEFAULTS
// ============================================================================

pub const DEFAULT_AGE: f64 = 40.0;
pub const DEFAULT_WORK_EXPERIENCE: f64 = 10.0;
pub const DEFAULT_WORK_HOURS_PER_DAY: f64 = 8.0;
pub const DEFAULT_WORK_DAYS_PER_WEEK: f64 = 5.0;
pub const DEFAULT_PROTECTIVE_EQUIPMENT_COUNT: f64 = 0.0;
pub const DEFAULT_CHEMICAL_EXPOSURE_COUNT: f64 = 0.0;
pub const DEFAULT_NUMBER_OF_CHILDREN: f64 = 2.0;

// ============================================================================
// CATEGORICAL ENUMERATIONS
// ============================================================================

/// Fixed value → ordinal code enumeration
#[derive(Debug, Clone, Copy)]
pub struct Enumeration {
    pub field: &'static str,
    pub codes: &'static [(&'static str, u8)],
}

impl Enumeration {
    /// Code for a value; unknown or missing values fall back to the first code.
    pub fn code(&self, value: Option<&str>) -> u8 {
        let fallback = self.codes.first().map(|&(_, c)| c).unwrap_or(0);
        let Some(value) = value else {
            return fallback;
        };

        match self.codes.iter().find(|&&(name, _)| name == value) {
            Some(&(_, code)) => code,
            None => {
                tracing::debug!("Unknown {} value {:?}, using first code", self.field, value);
                fallback
            }
        }
    }

    /// Declared values in order
    pub fn values(&self) -> impl Iterator<Item = &'static str> {
        self.codes.iter().map(|&(name, _)| name)
    }
}

pub const MARITAL_STATUS: Enumeration = Enumeration {
    field: "marital_status",
    codes: &[("célibataire", 0), ("mariée", 1), ("divorcée", 2), ("veuve", 3)],
};

pub const SOCIO_ECONOMIC_STATUS: Enumeration = Enumeration {
    field: "socio_economic_status",
    codes: &[("bas", 0), ("moyen", 1), ("bon", 2)],
};

pub const EMPLOYMENT_STATUS: Enumeration = Enumeration {
    field: "employment_status",
    codes: &[("saisonnière", 0), ("permanente", 1)],
};

/// `socio_economic_status` code for "bas"
pub const SOCIO_LOW: u8 = 0;
/// `socio_economic_status` code for "moyen"
pub const SOCIO_MEDIUM: u8 = 1;
/// `employment_status` code for "saisonnière"
pub const EMPLOYMENT_SEASONAL: u8 = 0;

// ============================================================================
// WEIGHT TABLES
// ============================================================================

/// Chemical severity (0-10)
pub const CHEMICAL_SEVERITY: &[(&str, f64)] = &[
    ("pesticides", 9.0),
    ("herbicides", 7.5),
    ("fongicides", 7.0),
    ("insecticides", 8.5),
    ("engrais chimiques", 6.0),
    ("engrais naturels", 3.0),
    ("produits phytosanitaires", 8.0),
];

/// Protective equipment effectiveness (0-10)
pub const PROTECTION_EFFECTIVENESS: &[(&str, f64)] = &[
    ("masque", 9.0),
    ("gants", 8.0),
    ("bottes", 7.0),
    ("casquette", 5.0),
    ("manteau", 6.0),
];

pub const MASK: &str = "masque";
pub const GLOVES: &str = "gants";

pub fn chemical_severity(item: &str) -> Option<f64> {
    lookup(CHEMICAL_SEVERITY, item)
}

pub fn protection_effectiveness(item: &str) -> Option<f64> {
    lookup(PROTECTION_EFFECTIVENESS, item)
}

/// Sum of every known effectiveness weight
pub fn total_effectiveness() -> f64 {
    PROTECTION_EFFECTIVENESS.iter().map(|&(_, w)| w).sum()
}

/// Sum of the severities of the first `n` declared chemicals
pub fn leading_severity_sum(n: usize) -> f64 {
    CHEMICAL_SEVERITY.iter().take(n).map(|&(_, w)| w).sum()
}

fn lookup(table: &[(&str, f64)], item: &str) -> Option<f64> {
    table.iter().find(|&&(name, _)| name == item).map(|&(_, w)| w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_falls_back_to_first_code() {
        assert_eq!(SOCIO_ECONOMIC_STATUS.code(Some("moyen")), 1);
        assert_eq!(SOCIO_ECONOMIC_STATUS.code(Some("élevé")), SOCIO_LOW);
        assert_eq!(SOCIO_ECONOMIC_STATUS.code(None), SOCIO_LOW);
        assert_eq!(MARITAL_STATUS.code(Some("veuve")), 3);
        assert_eq!(EMPLOYMENT_STATUS.code(Some("Permanente")), EMPLOYMENT_SEASONAL);
    }

    #[test]
    fn test_weight_sums() {
        assert_eq!(total_effectiveness(), 35.0);
        assert_eq!(leading_severity_sum(2), 16.5);
        assert_eq!(leading_severity_sum(0), 0.0);
        assert_eq!(leading_severity_sum(100), 49.0);
    }
}
