//! Model Training
//!
//! Builds a feature table from a survey upload, derives a synthetic target
//! from the risk heuristics, fits scaler + regressor and persists them.
//! Columns missing from the upload are filled with random values.

use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use super::dataset::SurveyTable;
use super::inference::RiskModel;
use super::regressor::LinearRegressor;
use super::scaler::StandardScaler;
use super::storage::{self, ModelError};

// ============================================================================
// COLUMNS
// ============================================================================

/// Feature order of the fitted model
pub const FEATURE_NAMES: [&str; 11] = [
    "age",
    "work_experience",
    "work_hours_per_day",
    "work_days_per_week",
    "mask_usage",
    "gloves_usage",
    "boots_usage",
    "protection_score",
    "has_respiratory_conditions",
    "has_skin_conditions",
    "has_neurological_conditions",
];

pub const AGE_COLUMN: &str = "Age";
pub const EXPERIENCE_COLUMN: &str = "Ancienneté agricole";
pub const HOURS_COLUMN: &str = "H travail / jour";
pub const DAYS_COLUMN: &str = "J travail / Sem";
pub const MASK_COLUMN: &str = "Masque pour pesticides";
pub const GLOVES_COLUMN: &str = "Gants";
pub const BOOTS_COLUMN: &str = "Bottes";
pub const RESPIRATORY_COLUMN: &str = "Troubles cardio-respiratoires";
pub const SKIN_COLUMN: &str = "Troubles cutanés/phanères";
pub const NEUROLOGICAL_COLUMN: &str = "Troubles neurologiques";

/// Usage frequency answers
pub const USAGE_LEVELS: [(&str, f64); 4] = [
    ("jamais", 0.0),
    ("parfois", 0.33),
    ("souvent", 0.67),
    ("toujours", 1.0),
];

pub const SPLIT_SEED: u64 = 42;
pub const HOLDOUT_FRACTION: f64 = 0.2;
pub const MIN_ROWS: usize = 2;

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("Not enough usable rows to train: {0}")]
    TooFewRows(usize),
    #[error(transparent)]
    Model(#[from] ModelError),
}

#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub rows: usize,
    pub skipped_rows: usize,
    pub train_rows: usize,
    pub holdout_rows: usize,
    pub holdout_mse: f64,
    pub synthetic_columns: Vec<String>,
}

/// How a numeric feature column is sourced
#[derive(Debug, Clone, Copy)]
enum Synthetic {
    Integer(i64, i64),
    Uniform(f64, f64),
    Usage,
}

impl Synthetic {
    fn sample<R: Rng>(self, rng: &mut R) -> f64 {
        match self {
            Synthetic::Integer(lo, hi) => rng.gen_range(lo..hi) as f64,
            Synthetic::Uniform(lo, hi) => rng.gen_range(lo..hi),
            Synthetic::Usage => USAGE_LEVELS.choose(rng).map(|&(_, v)| v).unwrap_or(0.0),
        }
    }
}

// ============================================================================
// TRAINING
// ============================================================================

/// Train and persist. Returns the fitted model; any failure is logged
/// and reported as `None`.
pub fn train_model(table: &SurveyTable, dir: &Path) -> Option<RiskModel> {
    match train(table, dir, &mut rand::thread_rng()) {
        Ok((model, report)) => {
            tracing::info!(
                "Model trained on {} rows, {} held out, {} skipped (hold-out MSE {:.3})",
                report.train_rows,
                report.holdout_rows,
                report.skipped_rows,
                report.holdout_mse
            );
            if !report.synthetic_columns.is_empty() {
                tracing::info!("Synthetic columns: {}", report.synthetic_columns.join(", "));
            }
            Some(model)
        }
        Err(e) => {
            tracing::error!("Error training model: {}", e);
            None
        }
    }
}

pub fn train<R: Rng>(
    table: &SurveyTable,
    dir: &Path,
    rng: &mut R,
) -> Result<(RiskModel, TrainingReport), TrainingError> {
    let (rows, skipped_rows, synthetic_columns) = build_features(table, rng);
    if rows.len() < MIN_ROWS {
        return Err(TrainingError::TooFewRows(rows.len()));
    }

    let targets: Vec<f64> = rows.iter().map(synthetic_target).collect();

    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.shuffle(&mut StdRng::seed_from_u64(SPLIT_SEED));
    let holdout_rows = ((rows.len() as f64 * HOLDOUT_FRACTION).ceil() as usize).min(rows.len() - 1);
    let (holdout_idx, train_idx) = order.split_at(holdout_rows);

    let pick = |idx: &[usize]| -> (Vec<Vec<f64>>, Vec<f64>) {
        idx.iter().map(|&i| (rows[i].to_vec(), targets[i])).unzip()
    };
    let (train_x, train_y) = pick(train_idx);
    let (holdout_x, holdout_y) = pick(holdout_idx);

    let scaler = StandardScaler::fit(&train_x);
    let regressor = LinearRegressor::fit(&scaler.transform(&train_x), &train_y);
    let holdout_mse = regressor.mse(&scaler.transform(&holdout_x), &holdout_y);
    tracing::info!("Hold-out MSE: {:.3} over {} rows", holdout_mse, holdout_rows);

    let model = RiskModel::new(
        regressor,
        scaler,
        FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
    );
    storage::save(&model, dir)?;

    let report = TrainingReport {
        rows: rows.len(),
        skipped_rows,
        train_rows: train_idx.len(),
        holdout_rows,
        holdout_mse,
        synthetic_columns,
    };
    Ok((model, report))
}

/// Synthetic risk target for one feature row, clipped to 0-100
pub fn synthetic_target(row: &[f64; 11]) -> f64 {
    let [age, _, hours, days, _, _, _, protection, respiratory, skin, neurological] = *row;

    let mut y = 20.0;
    if age > 50.0 {
        y += 15.0;
    }
    if hours > 8.0 {
        y += 10.0;
    }
    if days > 6.0 {
        y += 10.0;
    }
    y += (10.0 - protection) * 3.0;
    y += respiratory * 15.0 + skin * 10.0 + neurological * 12.0;

    y.clamp(0.0, 100.0)
}

// ============================================================================
// FEATURE TABLE
// ============================================================================

type Column = (&'static str, Synthetic);

const NUMERIC_COLUMNS: [Column; 4] = [
    (AGE_COLUMN, Synthetic::Integer(20, 70)),
    (EXPERIENCE_COLUMN, Synthetic::Integer(1, 40)),
    (HOURS_COLUMN, Synthetic::Uniform(4.0, 12.0)),
    (DAYS_COLUMN, Synthetic::Uniform(3.0, 7.0)),
];

const USAGE_COLUMNS: [&str; 3] = [MASK_COLUMN, GLOVES_COLUMN, BOOTS_COLUMN];
const HEALTH_COLUMNS: [&str; 3] = [RESPIRATORY_COLUMN, SKIN_COLUMN, NEUROLOGICAL_COLUMN];

fn build_features<R: Rng>(table: &SurveyTable, rng: &mut R) -> (Vec<[f64; 11]>, usize, Vec<String>) {
    let mut synthetic_columns = Vec::new();
    for name in NUMERIC_COLUMNS.iter().map(|(n, _)| *n).chain(USAGE_COLUMNS) {
        if !table.has_column(name) {
            tracing::warn!("Column '{}' missing from training data, substituting random values", name);
            synthetic_columns.push(name.to_string());
        }
    }

    let mut rows = Vec::with_capacity(table.len());
    let mut skipped = 0;

    'rows: for i in 0..table.len() {
        let mut row = [0.0; 11];

        for (slot, &(name, synthetic)) in NUMERIC_COLUMNS.iter().enumerate() {
            row[slot] = match table.cell(i, name) {
                Some(cell) => match cell.replace(',', ".").parse::<f64>() {
                    Ok(v) if v.is_finite() => v,
                    _ => {
                        tracing::debug!("Row {}: unparseable '{}' value {:?}", i, name, cell);
                        skipped += 1;
                        continue 'rows;
                    }
                },
                None => synthetic.sample(rng),
            };
        }

        for (offset, name) in USAGE_COLUMNS.iter().enumerate() {
            row[4 + offset] = match table.cell(i, name) {
                Some(cell) => usage_level(cell),
                None => Synthetic::Usage.sample(rng),
            };
        }
        row[7] = (row[4] + row[5] + row[6]) / 3.0 * 10.0;

        for (offset, name) in HEALTH_COLUMNS.iter().enumerate() {
            let present = table.cell(i, name).is_some_and(|c| !c.is_empty());
            row[8 + offset] = if present { 1.0 } else { 0.0 };
        }

        rows.push(row);
    }

    if skipped > 0 {
        tracing::warn!("Skipped {} rows with unparseable numeric values", skipped);
    }

    (rows, skipped, synthetic_columns)
}

/// Usage answer to a 0-1 level; unknown answers count as never
pub fn usage_level(answer: &str) -> f64 {
    let answer = answer.trim().to_lowercase();
    USAGE_LEVELS
        .iter()
        .find(|(label, _)| *label == answer)
        .map(|&(_, v)| v)
        .unwrap_or(0.0)
}
