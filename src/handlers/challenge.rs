//! Challenge session handlers

use axum::{extract::{State, Path}, http::StatusCode, Json};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{AppState, AppError, AppResult};
use crate::challenge::{ChallengeSession, IdentityForm};
use crate::classifier::classify_with_thresholds;
use crate::models::{
    ChallengeView, IdentityRequest, IdentityResponse,
    DrawingRequest, DrawingResponse,
};

fn session_not_found() -> AppError {
    AppError::NotFound("Challenge session not found".to_string())
}

/// Start a new session at step 1
pub async fn create(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<ChallengeView>)> {
    let session = ChallengeSession::new(&mut rand::thread_rng(), Utc::now());
    let view = ChallengeView::from(&session);

    tracing::info!("Challenge session created: {} (target {})", session.id, session.target);
    state.store.insert(session);

    Ok((StatusCode::CREATED, Json(view)))
}

/// Get session state
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ChallengeView>> {
    let session = state.store.get(id).ok_or_else(session_not_found)?;
    Ok(Json(ChallengeView::from(&session)))
}

/// Step 1: identity form + elapsed-time gate
pub async fn submit_identity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<IdentityRequest>,
) -> AppResult<Json<IdentityResponse>> {
    req.validate()?;

    let form = IdentityForm::from(req);
    let now = Utc::now();
    let gate = state.config.gate();

    let (outcome, step) = state
        .store
        .update(id, now, |session| {
            session
                .submit_identity(&form, now, &gate)
                .map(|outcome| (outcome, session.step))
        })
        .ok_or_else(session_not_found)??;

    Ok(Json(IdentityResponse {
        outcome,
        passed: outcome.passed(),
        message: outcome.message().to_string(),
        step,
    }))
}

/// Step 2: classify the drawing against the session target
pub async fn submit_drawing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<DrawingRequest>,
) -> AppResult<Json<DrawingResponse>> {
    let buffer = req
        .drawing
        .map(|d| d.into_buffer(state.config.max_canvas_pixels))
        .transpose()?;

    // Classify outside the store lock; record_verdict re-checks step and target
    let target = state
        .store
        .get(id)
        .ok_or_else(session_not_found)?
        .pending_target()?;

    let thresholds = state.config.thresholds;
    let verdict = tokio::task::spawn_blocking(move || {
        classify_with_thresholds(buffer.as_ref(), target, &thresholds)
    })
    .await
    .map_err(|e| AppError::InternalError(format!("classifier task failed: {}", e)))?;

    let (verdict, step, attempts) = state
        .store
        .update(id, Utc::now(), |session| {
            session
                .record_verdict(target, verdict)
                .map(|verdict| (verdict, session.step, session.attempts))
        })
        .ok_or_else(session_not_found)??;

    Ok(Json(DrawingResponse::new(verdict, step, attempts)))
}

/// Back to step 1 with a new target
pub async fn reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ChallengeView>> {
    let now = Utc::now();
    let view = state
        .store
        .update(id, now, |session| {
            session.reset(&mut rand::thread_rng(), now);
            ChallengeView::from(&*session)
        })
        .ok_or_else(session_not_found)?;

    tracing::info!("Challenge session reset: {}", id);
    Ok(Json(view))
}

/// Drop a session
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.store.remove(id).ok_or_else(session_not_found)?;
    Ok(StatusCode::NO_CONTENT)
}
