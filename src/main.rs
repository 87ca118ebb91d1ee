//! Agricultural Health Risk Prediction API
//!
//! Heuristic health-risk scoring for farm workers from structured or
//! free-text survey answers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    AGRI-RISK API (Axum)                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  free text ──► Keywords ──┐                                 │
//! │                           ▼                                 │
//! │  structured ──────► Features ──► Scoring ──► Explain        │
//! │                                                             │
//! │  /train_model ──► Training ──► model_data/ ──► RiskModel    │
//! │                                (hot-swapped Arc)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod logic;
mod models;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use parking_lot::RwLock;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logic::model::{self as risk_model, RiskModel};
use logic::scoring::{jitter, JitterSource};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "agri_risk=debug,tower_http=debug".into());
    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Agri-Risk API starting ({})...", config.environment);
    tracing::info!("Model directory: {}", config.model_dir.display());
    if config.risk_jitter == 0.0 {
        tracing::info!("Risk jitter disabled, scoring is deterministic");
    }

    // Load model artifacts (defaults if none)
    let model = risk_model::load_or_create(&config.model_dir);

    // Build application state
    let jitter = jitter::from_amplitude(config.risk_jitter);
    let state = AppState::new(config.clone(), model, jitter);

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    /// Current model; replaced wholesale after a successful retrain
    pub model: Arc<RwLock<Arc<RiskModel>>>,
    pub jitter: Arc<dyn JitterSource>,
    /// Held for the whole train-persist-swap sequence; one retrain at a time
    pub training: Arc<tokio::sync::Mutex<()>>,
}

impl AppState {
    pub fn new(config: config::Config, model: RiskModel, jitter: Arc<dyn JitterSource>) -> Self {
        Self {
            config,
            model: Arc::new(RwLock::new(Arc::new(model))),
            jitter,
            training: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// Snapshot of the current model; the lock is released on return
    pub fn current_model(&self) -> Arc<RiskModel> {
        self.model.read().clone()
    }

    pub fn replace_model(&self, model: RiskModel) {
        let model = Arc::new(model);
        *self.model.write() = model;
        tracing::info!("Risk model swapped");
    }
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    let training_routes = Router::new()
        .route("/train_model", post(handlers::training::train_model))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(upload_limit));

    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::check))
        .route("/predict_risk", post(handlers::predict::predict_risk))
        .route("/predict_risk_from_text", post(handlers::predict::predict_risk_from_text))
        .route("/analyze_text", post(handlers::text::analyze_text))
        .route("/extract_keywords", post(handlers::text::extract_keywords))
        .merge(training_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
