//! Nudge handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::warn;

use crate::{AppError, AppState};
use paisa_core::NudgeBackend;

/// Response for the nudge endpoint
#[derive(Debug, Serialize)]
pub struct NudgeResponse {
    pub message: String,
    pub risk_level: String,
}

/// GET /api/nudge - Generate a behavioral nudge via the AI backend
///
/// Generation failures (missing key, network failure, malformed response)
/// surface as 502 with an "Error generating nudge: ..." body instead of a
/// success-shaped payload.
pub async fn get_nudge(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NudgeResponse>, AppError> {
    let prompt = state.nudge_context.render();

    let message = state.ai.generate(&prompt).await.map_err(|e| {
        warn!(error = %e, "Nudge generation failed");
        AppError::bad_gateway(&format!("Error generating nudge: {}", e))
    })?;

    Ok(Json(NudgeResponse {
        message,
        risk_level: state.nudge_context.risk_level.clone(),
    }))
}
