//! Challenge Module - two-stage verification flow
//!
//! Step 1 is the behavioral gate (identity form, elapsed-time check).
//! Step 2 asks for an arrow sketch and hands it to the classifier.
//! The classifier verdict is the only input that can unlock a session.

pub mod step;
pub mod target;
pub mod gate;
pub mod session;

pub use step::Step;
pub use target::pick_target;
pub use gate::{GateConfig, GateOutcome, IdentityForm};
pub use session::{ChallengeSession, SessionError};
