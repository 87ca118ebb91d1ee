//! Configuration module

use std::env;
use std::path::PathBuf;

use crate::logic::scoring::rules::DEFAULT_JITTER_AMPLITUDE;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Directory of the persisted model artifacts
    pub model_dir: PathBuf,

    /// Half-width of the noise added to the overall risk (0 = deterministic)
    pub risk_jitter: f64,

    /// Body limit for `/train_model` uploads
    pub max_upload_bytes: usize,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            model_dir: PathBuf::from("model_data"),
            risk_jitter: DEFAULT_JITTER_AMPLITUDE,
            max_upload_bytes: 10 * 1024 * 1024,
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            model_dir: env::var("MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_dir),

            risk_jitter: env::var("RISK_JITTER")
                .ok()
                .and_then(|j| j.parse::<f64>().ok())
                .filter(|j| j.is_finite())
                .unwrap_or(defaults.risk_jitter),

            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(defaults.max_upload_bytes),

            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
