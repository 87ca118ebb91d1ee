//! Keywords Module - Free-Text Survey Processing
//!
//! ## Structure
//! - `dictionary`: category vocabularies with weights
//! - `extract`: whole-word keyword extraction, structured field extraction
//! - `analysis`: exploratory co-occurrence report

pub mod analysis;
pub mod dictionary;
pub mod extract;

pub use analysis::{analyze_text, TextAnalysis};
pub use dictionary::KeywordCategory;
pub use extract::{extract, extract_by_name, extract_structured_features, SurveyText};
