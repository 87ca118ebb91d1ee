//! Model Module
//!
//! Scoring entry point plus the persisted regressor lifecycle
//! (train, save, load-or-create).

pub mod dataset;
pub mod inference;
pub mod regressor;
pub mod scaler;
pub mod storage;
pub mod training;


pub use dataset::{DatasetError, SurveyTable};
pub use inference::{RiskModel, RiskResult};
pub use storage::load_or_create;
pub use training::train_model;
