//! Scoring Module
//!
//! Heuristic risk formula over normalized features.
//!
//! ## Structure
//! - `types`: `RiskScores`
//! - `rules`: weights and thresholds
//! - `jitter`: injectable noise sources
//! - `engine`: overall and organ-system formulas
//!
//! ## Usage
//! ```ignore
//! use crate::logic::scoring::{score, FixedJitter};
//!
//! let scores = score(&features, &FixedJitter(0.0));
//! assert!(scores.overall <= 100.0);
//! ```

pub mod engine;
pub mod jitter;
pub mod rules;
pub mod types;


pub use engine::{base_risk, overall_risk, score};
pub use jitter::{FixedJitter, JitterSource, UniformJitter};
pub use types::RiskScores;
