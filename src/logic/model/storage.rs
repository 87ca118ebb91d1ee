//! Model Storage
//!
//! JSON artifacts in the model directory:
//! - `risk_model.json`: regressor weights and bias
//! - `scaler.json`: per-column mean and scale
//! - `feature_names.json`: training column order (optional on load)
//!
//! Each artifact is written to a temp file in the same directory and renamed
//! into place, so a concurrent `load` sees either the old or the new file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;

use super::inference::RiskModel;

pub const MODEL_FILE: &str = "risk_model.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const FEATURE_NAMES_FILE: &str = "feature_names.json";

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model artifact not found: {0}")]
    NotFound(PathBuf),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid model artifact {path}: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Write all three artifacts, creating the directory if needed
pub fn save(model: &RiskModel, dir: &Path) -> Result<(), ModelError> {
    fs::create_dir_all(dir).map_err(|source| ModelError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    write_json(&dir.join(MODEL_FILE), &model.regressor)?;
    write_json(&dir.join(SCALER_FILE), &model.scaler)?;
    write_json(&dir.join(FEATURE_NAMES_FILE), &model.feature_names)?;

    tracing::info!("Model artifacts saved to {}", dir.display());
    Ok(())
}

/// Read the artifacts. Model and scaler are required.
pub fn load(dir: &Path) -> Result<RiskModel, ModelError> {
    let regressor = read_json(&dir.join(MODEL_FILE))?;
    let scaler = read_json(&dir.join(SCALER_FILE))?;

    let names_path = dir.join(FEATURE_NAMES_FILE);
    let feature_names = if names_path.exists() {
        read_json(&names_path)?
    } else {
        Vec::new()
    };

    Ok(RiskModel::new(regressor, scaler, feature_names))
}

/// Load saved artifacts, or fall back to a fresh default model
pub fn load_or_create(dir: &Path) -> RiskModel {
    match load(dir) {
        Ok(model) => {
            tracing::info!(
                "Loaded trained model from {} ({} features)",
                dir.display(),
                model.feature_names.len()
            );
            model
        }
        Err(ModelError::NotFound(path)) => {
            tracing::info!("No model at {}, using default model", path.display());
            RiskModel::default()
        }
        Err(e) => {
            tracing::error!("Failed to load model: {}", e);
            RiskModel::default()
        }
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ModelError> {
    let bytes = serde_json::to_vec_pretty(value).map_err(|source| ModelError::Serialization {
        path: path.to_path_buf(),
        source,
    })?;
    let io_error = |source: std::io::Error| ModelError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
    file.write_all(&bytes).map_err(io_error)?;
    file.as_file().sync_all().map_err(io_error)?;
    file.persist(path).map_err(|e| io_error(e.error))?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    if !path.exists() {
        return Err(ModelError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ModelError::Serialization {
        path: path.to_path_buf(),
        source,
    })
}
