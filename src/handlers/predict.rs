//! Risk prediction handlers

use axum::{extract::State, Json};
use validator::Validate;

use crate::logic::features::FeatureInput;
use crate::logic::keywords::extract_structured_features;
use crate::logic::model::RiskResult;
use crate::models::{FreeTextRecord, StructuredRecord};
use crate::{AppError, AppResult, AppState};

/// Score a structured survey record
pub async fn predict_risk(
    State(state): State<AppState>,
    Json(record): Json<StructuredRecord>,
) -> AppResult<Json<RiskResult>> {
    record.validate()?;
    let result = run_prediction(&state, record.to_feature_input()).await?;
    Ok(Json(result))
}

/// Extract features from free-text answers, then score them
pub async fn predict_risk_from_text(
    State(state): State<AppState>,
    Json(record): Json<FreeTextRecord>,
) -> AppResult<Json<RiskResult>> {
    let input = extract_structured_features(&record.as_survey_text());
    tracing::debug!(
        chemicals = ?input.chemical_exposure,
        protection = ?input.protective_equipment,
        tasks = ?input.tasks,
        "Extracted features from text"
    );

    let result = run_prediction(&state, input).await?;
    Ok(Json(result))
}

async fn run_prediction(state: &AppState, input: FeatureInput) -> AppResult<RiskResult> {
    let model = state.current_model();
    let jitter = state.jitter.clone();

    tokio::task::spawn_blocking(move || model.predict(&input, jitter.as_ref()))
        .await
        .map_err(|e| AppError::PredictionError(e.to_string()))
}
