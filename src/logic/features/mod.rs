//! Features Module - Feature Normalization
//!
//! Turns heterogeneous survey input (structured fields or fields pulled out
//! of free text) into one canonical feature set.
//!
//! ## Structure
//! - `input`: partial, loosely-typed input mapping
//! - `layout`: defaults, categorical enumerations, weight tables
//! - `normalize`: the normalizer and the two derived scores

pub mod input;
pub mod layout;
pub mod normalize;


pub use input::{FeatureInput, FlagValue, ItemList, NumericValue};
pub use normalize::{normalize, NormalizedFeatures};
