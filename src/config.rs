//! Configuration module

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::challenge::GateConfig;
use crate::classifier::{ClassifierThresholds, LUMINANCE_THRESHOLD, MIN_STROKE_SIZE};
use crate::constants::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Classifier tuning
    pub thresholds: ClassifierThresholds,

    /// Minimum identity form fill time, checked by `validate`
    pub min_fill_seconds: f64,

    /// Idle session lifetime in seconds
    pub session_ttl_secs: u64,

    /// Expiry sweep interval in seconds
    pub session_sweep_secs: u64,

    /// Largest accepted canvas (width * height)
    pub max_canvas_pixels: u64,

    /// Request body limit in bytes; defaults to what `max_canvas_pixels` needs
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_canvas_pixels = parse_or(&lookup, "MAX_CANVAS_PIXELS", DEFAULT_MAX_CANVAS_PIXELS);
        let default_body = usize::try_from(body_bytes_for(max_canvas_pixels)).unwrap_or(usize::MAX);

        Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),

            port: parse_or(&lookup, "PORT", DEFAULT_PORT),

            thresholds: ClassifierThresholds::new(
                parse_or(&lookup, "LUMINANCE_THRESHOLD", LUMINANCE_THRESHOLD),
                parse_or(&lookup, "MIN_STROKE_SIZE", MIN_STROKE_SIZE),
            ),

            min_fill_seconds: parse_or(&lookup, "MIN_FILL_SECONDS", DEFAULT_MIN_FILL_SECONDS),

            session_ttl_secs: parse_or(&lookup, "SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS),

            session_sweep_secs: parse_or(&lookup, "SESSION_SWEEP_SECS", DEFAULT_SESSION_SWEEP_SECS),

            max_canvas_pixels,

            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", default_body),
        }
    }

    /// Reject values the service cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds
            .validate()
            .map_err(|reason| ConfigError::Invalid { key: "MIN_STROKE_SIZE", reason })?;

        if GateConfig::from_secs_f64(self.min_fill_seconds).is_none() {
            return Err(ConfigError::Invalid {
                key: "MIN_FILL_SECONDS",
                reason: format!("must be between 0 and {}", MAX_MIN_FILL_SECONDS),
            });
        }
        if self.session_ttl_secs == 0 || self.session_ttl_secs > MAX_SESSION_TTL_SECS {
            return Err(ConfigError::Invalid {
                key: "SESSION_TTL_SECS",
                reason: format!("must be between 1 and {}", MAX_SESSION_TTL_SECS),
            });
        }
        if self.session_sweep_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "SESSION_SWEEP_SECS",
                reason: "must be positive".to_string(),
            });
        }
        if self.max_canvas_pixels == 0 {
            return Err(ConfigError::Invalid {
                key: "MAX_CANVAS_PIXELS",
                reason: "must be positive".to_string(),
            });
        }

        let needed = body_bytes_for(self.max_canvas_pixels);
        if (self.max_body_bytes as u64) < needed {
            return Err(ConfigError::Invalid {
                key: "MAX_BODY_BYTES",
                reason: format!(
                    "{} bytes cannot carry a {}-pixel canvas (need {})",
                    self.max_body_bytes, self.max_canvas_pixels, needed
                ),
            });
        }
        Ok(())
    }

    /// Behavioral gate policy; only meaningful after `validate` passed
    pub fn gate(&self) -> GateConfig {
        GateConfig::from_secs_f64(self.min_fill_seconds).unwrap_or_default()
    }
}

/// Body size needed to post a canvas of `pixels` as a JSON array
pub fn body_bytes_for(pixels: u64) -> u64 {
    pixels
        .saturating_mul(JSON_BYTES_PER_PIXEL)
        .saturating_add(BODY_SLACK_BYTES)
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
