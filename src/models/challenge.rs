//! Challenge session models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::challenge::{ChallengeSession, GateOutcome, IdentityForm, Step};
use crate::classifier::{DirectionLabel, Verdict};

use super::drawing::{DrawingPayload, VerdictResponse};

/// Session info for API response
#[derive(Debug, Serialize, Deserialize)]
pub struct ChallengeView {
    pub id: Uuid,
    pub step: Step,
    pub progress: u8,
    pub target: DirectionLabel,
    pub icon: String,
    pub instruction: String,
    pub attempts: u32,
    pub unlocked: bool,
    pub last_verdict: Option<Verdict>,
    pub created_at: DateTime<Utc>,
}

impl From<&ChallengeSession> for ChallengeView {
    fn from(session: &ChallengeSession) -> Self {
        Self {
            id: session.id,
            step: session.step,
            progress: session.step.progress(),
            target: session.target,
            icon: session.target.icon().to_string(),
            instruction: session.instruction(),
            attempts: session.attempts,
            unlocked: session.step.is_terminal(),
            last_verdict: session.last_verdict.clone(),
            created_at: session.created_at,
        }
    }
}

/// Step 1 request. Empty fields are a gate outcome, not a validation error.
#[derive(Debug, Deserialize, Validate)]
pub struct IdentityRequest {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 254))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 32))]
    pub phone: String,
}

impl From<IdentityRequest> for IdentityForm {
    fn from(req: IdentityRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
        }
    }
}

/// Step 1 response
#[derive(Debug, Serialize, Deserialize)]
pub struct IdentityResponse {
    pub outcome: GateOutcome,
    pub passed: bool,
    pub message: String,
    pub step: Step,
}

/// Step 2 request
#[derive(Debug, Deserialize)]
pub struct DrawingRequest {
    /// None when the drawing surface produced nothing
    #[serde(default)]
    pub drawing: Option<DrawingPayload>,
}

/// Step 2 response
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingResponse {
    #[serde(flatten)]
    pub verdict: VerdictResponse,
    pub step: Step,
    pub attempts: u32,
    pub unlocked: bool,
    /// Line shown under the verdict
    pub hint: String,
}

impl DrawingResponse {
    pub fn new(verdict: Verdict, step: Step, attempts: u32) -> Self {
        let unlocked = step.is_terminal();
        let hint = if unlocked { UNLOCKED_HINT } else { RETRY_HINT };
        Self {
            verdict: verdict.into(),
            step,
            attempts,
            unlocked,
            hint: hint.to_string(),
        }
    }
}

pub const UNLOCKED_HINT: &str = "SYSTEM UNLOCKED. You may proceed.";
pub const RETRY_HINT: &str = "Tip: Draw the arrow head clearly so we know which way it points.";
