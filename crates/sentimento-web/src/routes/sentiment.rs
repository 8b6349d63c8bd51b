//! Sentiment analysis route handler.

use anyhow::anyhow;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use sentimento_core::{
    model::{AnalysisRequest, ApiResponse},
    SentimentoError,
};
use tracing::error;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/sentiment-analysis
///
/// Configuration is checked before the body is read, so a misconfigured
/// server reports that regardless of what the client sent. The body is
/// decoded as JSON whatever its `Content-Type` says.
pub async fn analyze(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ApiResponse>, ApiError> {
    state.service.ensure_configured()?;

    let body = body.map_err(|rejection| {
        let detail = rejection.body_text();
        error!(error = %detail, "Failed to read analysis request body");
        SentimentoError::Unexpected(anyhow!(detail))
    })?;

    let request: AnalysisRequest = serde_json::from_slice(&body).map_err(|e| {
        error!(error = %e, "Failed to decode analysis request body");
        SentimentoError::Unexpected(anyhow!(e).context("Invalid analysis request body"))
    })?;

    let result = state.service.analyze(&request).await?;

    Ok(Json(ApiResponse::ok(result)))
}
