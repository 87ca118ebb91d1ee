//! Survey request bodies

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::logic::features::{FeatureInput, FlagValue, ItemList, NumericValue};
use crate::logic::keywords::SurveyText;

/// Fully-typed survey record
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StructuredRecord {
    #[validate(range(min = 0.0, max = 120.0))]
    pub age: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub work_experience: f64,
    #[validate(range(min = 0.0, max = 24.0))]
    pub work_hours_per_day: f64,
    #[serde(default = "default_work_days")]
    #[validate(range(min = 0.0, max = 7.0))]
    pub work_days_per_week: f64,
    pub protective_equipment: Vec<String>,
    pub chemical_exposure: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<String>,
    pub has_respiratory_conditions: bool,
    #[serde(default)]
    pub has_skin_conditions: bool,
    #[serde(default)]
    pub has_chronic_exposure: bool,
    #[serde(default = "default_marital_status")]
    pub marital_status: String,
    #[serde(default)]
    #[validate(range(max = 30))]
    pub number_of_children: u32,
    #[serde(default = "default_socio_economic_status")]
    pub socio_economic_status: String,
    #[serde(default = "default_employment_status")]
    pub employment_status: String,
}

fn default_work_days() -> f64 {
    5.0
}

fn default_marital_status() -> String {
    "mariée".to_string()
}

fn default_socio_economic_status() -> String {
    "moyen".to_string()
}

fn default_employment_status() -> String {
    "permanente".to_string()
}

impl StructuredRecord {
    /// Feature mapping; list counts come from the list lengths
    pub fn to_feature_input(&self) -> FeatureInput {
        FeatureInput {
            age: Some(NumericValue::Number(self.age)),
            work_experience: Some(NumericValue::Number(self.work_experience)),
            work_hours_per_day: Some(NumericValue::Number(self.work_hours_per_day)),
            work_days_per_week: Some(NumericValue::Number(self.work_days_per_week)),
            protective_equipment_count: Some(self.protective_equipment.len().into()),
            chemical_exposure_count: Some(self.chemical_exposure.len().into()),
            number_of_children: Some(self.number_of_children.into()),
            has_respiratory_conditions: Some(self.has_respiratory_conditions.into()),
            has_skin_conditions: Some(self.has_skin_conditions.into()),
            has_chronic_exposure: Some(self.has_chronic_exposure.into()),
            marital_status: Some(self.marital_status.clone()),
            socio_economic_status: Some(self.socio_economic_status.clone()),
            employment_status: Some(self.employment_status.clone()),
            protective_equipment: Some(ItemList::Items(self.protective_equipment.clone())),
            chemical_exposure: Some(ItemList::Items(self.chemical_exposure.clone())),
            tasks: self.tasks.clone(),
        }
    }
}

/// Five free-text survey answers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeTextRecord {
    pub general_description: String,
    pub chemicals_text: String,
    pub tasks_text: String,
    pub health_text: String,
    pub protection_text: String,
}

impl FreeTextRecord {
    pub fn as_survey_text(&self) -> SurveyText<'_> {
        SurveyText {
            general_description: &self.general_description,
            chemicals_text: &self.chemicals_text,
            tasks_text: &self.tasks_text,
            health_text: &self.health_text,
            protection_text: &self.protection_text,
        }
    }
}

/// `{"text": ...}` body of the text endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeywordQuery {
    #[serde(rename = "type", default = "default_keyword_type")]
    pub category: String,
}

fn default_keyword_type() -> String {
    "chemical".to_string()
}
