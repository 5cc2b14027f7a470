//! Stateless classification handler

use axum::{extract::State, Json};

use crate::{AppState, AppError, AppResult};
use crate::classifier::classify_with_thresholds;
use crate::models::{ClassifyRequest, VerdictResponse};

/// Classify one drawing against an explicit target, no session involved
pub async fn classify(
    State(state): State<AppState>,
    Json(req): Json<ClassifyRequest>,
) -> AppResult<Json<VerdictResponse>> {
    if !req.target.is_cardinal() {
        return Err(AppError::ValidationError(
            "target must be one of Left, Right, Up, Down".to_string(),
        ));
    }

    let buffer = req
        .drawing
        .map(|d| d.into_buffer(state.config.max_canvas_pixels))
        .transpose()?;

    let verdict = classify_with_thresholds(buffer.as_ref(), req.target, &state.config.thresholds);
    tracing::debug!("Stateless classify: {} -> {}", req.target, verdict.kind);

    Ok(Json(verdict.into()))
}
