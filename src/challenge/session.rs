//! Challenge Session
//!
//! Per-user state of the two-stage flow. Owned by the store, mutated only
//! through the transitions below; the verdict from the classifier is the
//! only thing that can unlock a session.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use super::gate::{self, GateConfig, GateOutcome, IdentityForm};
use super::step::Step;
use super::target::pick_target;
use crate::classifier::{DirectionLabel, Verdict};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session is in step {actual}, expected {expected}")]
    WrongStep { expected: Step, actual: Step },

    #[error("target changed from {classified} to {current} while the drawing was analyzed")]
    TargetChanged {
        classified: DirectionLabel,
        current: DirectionLabel,
    },
}

/// State of one verification attempt
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeSession {
    pub id: Uuid,
    pub step: Step,
    pub target: DirectionLabel,
    /// Clock for the behavioral gate, restarted on TooFast and reset
    pub started_at: DateTime<Utc>,
    /// Drawing submissions since the last reset
    pub attempts: u32,
    pub last_verdict: Option<Verdict>,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

impl ChallengeSession {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            step: Step::Behavioral,
            target: pick_target(rng),
            started_at: now,
            attempts: 0,
            last_verdict: None,
            created_at: now,
            last_seen_at: now,
        }
    }

    /// Prompt shown above the drawing surface
    pub fn instruction(&self) -> String {
        format!("Draw an Arrow pointing {}", self.target)
    }

    /// Step 1 submission
    pub fn submit_identity(
        &mut self,
        form: &IdentityForm,
        now: DateTime<Utc>,
        config: &GateConfig,
    ) -> Result<GateOutcome, SessionError> {
        self.expect_step(Step::Behavioral)?;

        let outcome = gate::evaluate(form, self.started_at, now, config);
        match outcome {
            GateOutcome::Passed => {
                self.step = Step::Cognitive;
                tracing::info!("Session {} passed behavioral gate", self.id);
            }
            GateOutcome::TooFast => {
                self.started_at = now;
                tracing::warn!("Session {} submitted identity too fast", self.id);
            }
            GateOutcome::MissingFields => {}
        }

        Ok(outcome)
    }

    /// Step 2, first half: the target a drawing must be classified against
    pub fn pending_target(&self) -> Result<DirectionLabel, SessionError> {
        self.expect_step(Step::Cognitive)?;
        Ok(self.target)
    }

    /// Step 2, second half: apply a verdict computed for `classified`
    ///
    /// Classification runs outside the store lock, so the step and target are
    /// checked again here; a reset in between voids the verdict.
    pub fn record_verdict(
        &mut self,
        classified: DirectionLabel,
        verdict: Verdict,
    ) -> Result<Verdict, SessionError> {
        self.expect_step(Step::Cognitive)?;
        if self.target != classified {
            return Err(SessionError::TargetChanged {
                classified,
                current: self.target,
            });
        }

        self.attempts += 1;

        if verdict.is_match() {
            self.step = Step::Unlocked;
            tracing::info!("Session {} unlocked after {} attempt(s)", self.id, self.attempts);
        } else {
            tracing::warn!(
                "Session {} attempt {} rejected: {}",
                self.id,
                self.attempts,
                verdict.kind
            );
        }

        self.last_verdict = Some(verdict.clone());
        Ok(verdict)
    }

    /// Start over from step 1 with a fresh target
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, now: DateTime<Utc>) {
        self.step = Step::Behavioral;
        self.started_at = now;
        self.target = pick_target(rng);
        self.attempts = 0;
        self.last_verdict = None;
    }

    fn expect_step(&self, expected: Step) -> Result<(), SessionError> {
        if self.step != expected {
            return Err(SessionError::WrongStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }
}
