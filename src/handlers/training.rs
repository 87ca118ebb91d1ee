//! Model training handler

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::logic::model::{self, SurveyTable};
use crate::models::MessageResponse;
use crate::{AppError, AppResult, AppState};

/// Accepted upload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UploadFormat {
    Csv,
    Spreadsheet,
    Unknown,
}

impl UploadFormat {
    fn from_filename(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.ends_with(".csv") {
            UploadFormat::Csv
        } else if name.ends_with(".xlsx") || name.ends_with(".xls") {
            UploadFormat::Spreadsheet
        } else {
            UploadFormat::Unknown
        }
    }
}

/// Retrain from an uploaded survey file (multipart field `file`)
pub async fn train_model(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<MessageResponse>> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::ValidationError(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        upload = Some((filename, bytes));
        break;
    }

    let (filename, bytes) =
        upload.ok_or_else(|| AppError::ValidationError("File field is required".to_string()))?;

    let table = match UploadFormat::from_filename(&filename) {
        UploadFormat::Csv => SurveyTable::from_bytes(&bytes)?,
        UploadFormat::Spreadsheet => SurveyTable::from_spreadsheet(&bytes)?,
        UploadFormat::Unknown => {
            return Err(AppError::ValidationError(
                "Unsupported file format. Please upload a CSV or Excel file".to_string(),
            ));
        }
    };
    tracing::info!(
        "Training model from {} ({} bytes, {} rows)",
        filename,
        bytes.len(),
        table.len()
    );

    let _guard = state.training.lock().await;
    let dir = state.config.model_dir.clone();
    let trained = tokio::task::spawn_blocking(move || model::train_model(&table, &dir)).await?;

    match trained {
        Some(new_model) => {
            state.replace_model(new_model);
            Ok(Json(MessageResponse::new("Model trained successfully")))
        }
        None => Err(AppError::TrainingError("Model training failed".to_string())),
    }
}
