//! Health check handlers

use axum::{extract::State, Json};

use crate::models::{HealthResponse, MessageResponse};
use crate::AppState;

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Agricultural Health Risk Prediction API"))
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let model = state.current_model();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        model_trained: model.is_trained(),
        feature_names: model.feature_names.clone(),
    })
}
