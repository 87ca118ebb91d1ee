//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Bad input (empty text, out-of-range fields, bad upload)
    ValidationError(String),

    // Scoring pipeline failure
    PredictionError(String),

    // Dataset or fitting failure
    TrainingError(String),

    // Generic errors
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::PredictionError(msg) => {
                tracing::error!("Prediction error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Prediction error: {}", msg))
            }
            AppError::TrainingError(msg) => {
                tracing::error!("Training error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Training error: {}", msg))
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl From<crate::logic::model::DatasetError> for AppError {
    fn from(err: crate::logic::model::DatasetError) -> Self {
        AppError::TrainingError(err.to_string())
    }
}
