//! Behavioral Gate
//!
//! Step 1 check: all identity fields filled in, and the form took at least
//! `min_fill_time` to complete. Anything faster is treated as scripted input.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MIN_FILL_SECONDS, MAX_MIN_FILL_SECONDS};

/// Identity fields typed in step 1
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl IdentityForm {
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.phone.is_empty()
    }
}

/// Gate policy
#[derive(Debug, Clone, Copy)]
pub struct GateConfig {
    pub min_fill_time: Duration,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            min_fill_time: Duration::milliseconds((DEFAULT_MIN_FILL_SECONDS * 1000.0) as i64),
        }
    }
}

impl GateConfig {
    /// None for NaN, infinities, negatives, or values past `MAX_MIN_FILL_SECONDS`
    pub fn from_secs_f64(secs: f64) -> Option<Self> {
        if !secs.is_finite() || !(0.0..=MAX_MIN_FILL_SECONDS).contains(&secs) {
            return None;
        }
        let min_fill_time = Duration::try_milliseconds((secs * 1000.0).round() as i64)?;
        Some(Self { min_fill_time })
    }
}

/// Result of one identity submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateOutcome {
    Passed,
    TooFast,
    MissingFields,
}

impl GateOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            GateOutcome::Passed => "Behavioral Match Verified.",
            GateOutcome::TooFast => "Suspicious activity (Too fast). Try again.",
            GateOutcome::MissingFields => "Please fill in all details.",
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, GateOutcome::Passed)
    }
}

/// Evaluate a submission made at `now` for a clock started at `started_at`
pub fn evaluate(
    form: &IdentityForm,
    started_at: DateTime<Utc>,
    now: DateTime<Utc>,
    config: &GateConfig,
) -> GateOutcome {
    if !form.is_complete() {
        return GateOutcome::MissingFields;
    }

    if now - started_at < config.min_fill_time {
        return GateOutcome::TooFast;
    }

    GateOutcome::Passed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> IdentityForm {
        IdentityForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
        }
    }

    #[test]
    fn test_missing_fields_checked_first() {
        let start = Utc::now();
        let partial = IdentityForm {
            phone: String::new(),
            ..form()
        };
        let outcome = evaluate(&partial, start, start, &GateConfig::default());
        assert_eq!(outcome, GateOutcome::MissingFields);
        assert_eq!(outcome.message(), "Please fill in all details.");
    }

    #[test]
    fn test_fast_submission_rejected() {
        let start = Utc::now();
        let now = start + Duration::milliseconds(1999);
        assert_eq!(evaluate(&form(), start, now, &GateConfig::default()), GateOutcome::TooFast);
    }

    #[test]
    fn test_submission_at_limit_passes() {
        let start = Utc::now();
        let now = start + Duration::seconds(2);
        let outcome = evaluate(&form(), start, now, &GateConfig::default());
        assert!(outcome.passed());
    }

    #[test]
    fn test_clock_skew_counts_as_too_fast() {
        let start = Utc::now();
        let now = start - Duration::seconds(5);
        assert_eq!(evaluate(&form(), start, now, &GateConfig::default()), GateOutcome::TooFast);
    }

    #[test]
    fn test_custom_fill_time() {
        let config = GateConfig::from_secs_f64(0.5).unwrap();
        let start = Utc::now();
        assert!(evaluate(&form(), start, start + Duration::milliseconds(500), &config).passed());
    }

    #[test]
    fn test_fill_time_out_of_range() {
        assert!(GateConfig::from_secs_f64(f64::NAN).is_none());
        assert!(GateConfig::from_secs_f64(f64::INFINITY).is_none());
        assert!(GateConfig::from_secs_f64(-1e300).is_none());
        assert!(GateConfig::from_secs_f64(-0.5).is_none());
        assert!(GateConfig::from_secs_f64(MAX_MIN_FILL_SECONDS + 1.0).is_none());
        assert_eq!(
            GateConfig::from_secs_f64(0.0).map(|g| g.min_fill_time),
            Some(Duration::zero())
        );
    }
}
