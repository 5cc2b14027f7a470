//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! Classifier thresholds live in `classifier::rules`.

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_PORT: u16 = 8080;

/// Minimum time (seconds) the identity form must take to fill in
pub const DEFAULT_MIN_FILL_SECONDS: f64 = 2.0;

/// Upper bound accepted for the fill time (one day)
pub const MAX_MIN_FILL_SECONDS: f64 = 86_400.0;

/// Idle sessions older than this are dropped (seconds)
pub const DEFAULT_SESSION_TTL_SECS: u64 = 15 * 60;

/// Upper bound accepted for the session TTL (30 days)
pub const MAX_SESSION_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// How often the expiry sweep runs (seconds)
pub const DEFAULT_SESSION_SWEEP_SECS: u64 = 60;

/// Largest canvas accepted for classification (width * height)
pub const DEFAULT_MAX_CANVAS_PIXELS: u64 = 4_000_000;

/// Worst-case JSON size of one RGBA pixel: four "255," entries
pub const JSON_BYTES_PER_PIXEL: u64 = 16;

/// Room for the envelope around the pixel array (target, width, ...)
pub const BODY_SLACK_BYTES: u64 = 64 * 1024;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "SecureFlow";
