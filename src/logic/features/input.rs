//! Feature Input
//!
//! Loosely-typed, partial feature mapping accepted by the normalizer.
//! Every field is optional; values may arrive as numbers, booleans,
//! numeric strings, lists or comma-joined strings.

use serde::{Deserialize, Serialize};

/// Numeric-like value (`40`, `40.5`, `"40"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Number(f64),
    Text(String),
}

impl NumericValue {
    /// Coerce to f64. Unparseable text yields `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumericValue::Number(n) if n.is_finite() => Some(*n),
            NumericValue::Number(_) => None,
            NumericValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        NumericValue::Number(value)
    }
}

impl From<u32> for NumericValue {
    fn from(value: u32) -> Self {
        NumericValue::Number(f64::from(value))
    }
}

impl From<usize> for NumericValue {
    fn from(value: usize) -> Self {
        NumericValue::Number(value as f64)
    }
}

/// Boolean-like value (`true`, `1`, `"yes"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Text tokens accepted as true
const TRUTHY_TOKENS: &[&str] = &["1", "true", "True", "yes", "Yes"];

impl FlagValue {
    /// Only `true`, `1` and the truthy tokens count; everything else is false.
    pub fn is_truthy(&self) -> bool {
        match self {
            FlagValue::Bool(b) => *b,
            FlagValue::Number(n) => *n == 1.0,
            FlagValue::Text(s) => TRUTHY_TOKENS.contains(&s.as_str()),
        }
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

/// Item list given either as an array or as a comma-joined string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemList {
    Items(Vec<String>),
    Joined(String),
}

impl ItemList {
    /// Items trimmed and lower-cased, in input order.
    ///
    /// A joined string is split on `,`; the empty string yields one empty item.
    pub fn cleaned(&self) -> Vec<String> {
        match self {
            ItemList::Items(items) => items.iter().map(|i| i.trim().to_lowercase()).collect(),
            ItemList::Joined(s) => s.split(',').map(|i| i.trim().to_lowercase()).collect(),
        }
    }

    /// Number of listed items, recognized or not
    pub fn len(&self) -> usize {
        match self {
            ItemList::Items(items) => items.len(),
            ItemList::Joined(s) => s.split(',').count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<String>> for ItemList {
    fn from(items: Vec<String>) -> Self {
        ItemList::Items(items)
    }
}

/// Partial feature mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureInput {
    #[serde(default)]
    pub age: Option<NumericValue>,
    #[serde(default)]
    pub work_experience: Option<NumericValue>,
    #[serde(default)]
    pub work_hours_per_day: Option<NumericValue>,
    #[serde(default)]
    pub work_days_per_week: Option<NumericValue>,
    #[serde(default)]
    pub protective_equipment_count: Option<NumericValue>,
    #[serde(default)]
    pub chemical_exposure_count: Option<NumericValue>,
    #[serde(default)]
    pub number_of_children: Option<NumericValue>,

    #[serde(default)]
    pub has_respiratory_conditions: Option<FlagValue>,
    #[serde(default)]
    pub has_skin_conditions: Option<FlagValue>,
    #[serde(default)]
    pub has_chronic_exposure: Option<FlagValue>,

    #[serde(default)]
    pub marital_status: Option<String>,
    #[serde(default)]
    pub socio_economic_status: Option<String>,
    #[serde(default)]
    pub employment_status: Option<String>,

    #[serde(default)]
    pub protective_equipment: Option<ItemList>,
    #[serde(default)]
    pub chemical_exposure: Option<ItemList>,

    /// Reported tasks; carried along, not scored
    #[serde(default)]
    pub tasks: Vec<String>,
}
