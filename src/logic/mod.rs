//! Logic Module - Risk Scoring Engine
//!
//! ## Pipeline
//! free text -> `keywords` -> `features` -> `scoring` -> `explain`
//!
//! `model/` owns the entry point (`RiskModel::predict`) and the persisted
//! regressor lifecycle used by `/train_model`.

pub mod explain;
pub mod features;
pub mod keywords;
pub mod model;
pub mod scoring;
