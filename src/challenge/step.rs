//! Challenge steps

use serde::{Deserialize, Serialize};

/// Position of a session in the two-stage flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// Step 1: identity form + typing-time gate
    Behavioral,
    /// Step 2: draw the requested arrow
    Cognitive,
    /// Terminal
    Unlocked,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Behavioral => "Behavioral",
            Step::Cognitive => "Cognitive",
            Step::Unlocked => "Unlocked",
        }
    }

    /// Progress bar value, 0-100
    pub fn progress(&self) -> u8 {
        match self {
            Step::Behavioral => 0,
            Step::Cognitive => 50,
            Step::Unlocked => 100,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Step::Unlocked)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
