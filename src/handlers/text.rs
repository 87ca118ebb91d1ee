//! Free-text handlers

use axum::{extract::Query, Json};

use crate::logic::keywords::{self, TextAnalysis};
use crate::models::{KeywordQuery, KeywordsResponse, TextRequest};
use crate::{AppError, AppResult};

/// Co-occurrence report over one text
pub async fn analyze_text(Json(req): Json<TextRequest>) -> AppResult<Json<TextAnalysis>> {
    let text = require_text(&req)?;
    Ok(Json(keywords::analyze_text(text)))
}

/// Keywords of one category (`?type=chemical|task|health|protection`)
pub async fn extract_keywords(
    Query(query): Query<KeywordQuery>,
    Json(req): Json<TextRequest>,
) -> AppResult<Json<KeywordsResponse>> {
    let text = require_text(&req)?;
    let keywords = keywords::extract_by_name(text, &query.category);
    Ok(Json(KeywordsResponse { keywords }))
}

fn require_text(req: &TextRequest) -> AppResult<&str> {
    if req.text.trim().is_empty() {
        return Err(AppError::ValidationError("Text field is required".to_string()));
    }
    Ok(&req.text)
}
