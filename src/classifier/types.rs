//! Classifier Types
//!
//! Core types for direction classification.
//! No logic here - data structures only.

use serde::{Deserialize, Serialize};

// ============================================================================
// DIRECTION LABEL
// ============================================================================

/// Direction an arrow sketch can point to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectionLabel {
    Left,
    Right,
    Up,
    Down,
    /// Only ever produced by the classifier, never a valid target
    Unknown,
}

/// The four labels a challenge may ask for
pub const CARDINAL_DIRECTIONS: [DirectionLabel; 4] = [
    DirectionLabel::Left,
    DirectionLabel::Right,
    DirectionLabel::Up,
    DirectionLabel::Down,
];

impl DirectionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectionLabel::Left => "Left",
            DirectionLabel::Right => "Right",
            DirectionLabel::Up => "Up",
            DirectionLabel::Down => "Down",
            DirectionLabel::Unknown => "Unknown",
        }
    }

    /// Arrow glyph shown next to the instruction
    pub fn icon(&self) -> &'static str {
        match self {
            DirectionLabel::Right => "➡️",
            DirectionLabel::Left => "⬅️",
            DirectionLabel::Up => "⬆️",
            DirectionLabel::Down => "⬇️",
            DirectionLabel::Unknown => "",
        }
    }

    pub fn is_cardinal(&self) -> bool {
        !matches!(self, DirectionLabel::Unknown)
    }
}

impl std::fmt::Display for DirectionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// VERDICT
// ============================================================================

/// Closed set of classification outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerdictKind {
    /// No buffer was supplied at all
    NoDrawing,
    /// Buffer present but without a single ink pixel
    EmptyCanvas,
    /// Ink bounding box below the size floor on either axis
    TooSmall,
    /// Zero ink mass after the size checks passed
    UnanalyzableShape,
    Match,
    Mismatch,
}

impl VerdictKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictKind::NoDrawing => "NoDrawing",
            VerdictKind::EmptyCanvas => "EmptyCanvas",
            VerdictKind::TooSmall => "TooSmall",
            VerdictKind::UnanalyzableShape => "UnanalyzableShape",
            VerdictKind::Match => "Match",
            VerdictKind::Mismatch => "Mismatch",
        }
    }
}

impl std::fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one classification call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub kind: VerdictKind,
    pub message: String,
    /// Set only for Match and Mismatch
    pub detected: Option<DirectionLabel>,
}

impl Verdict {
    pub fn no_drawing() -> Self {
        Self::rejected(VerdictKind::NoDrawing, "No drawing detected.")
    }

    pub fn empty_canvas() -> Self {
        Self::rejected(VerdictKind::EmptyCanvas, "Canvas is empty. Draw clearly!")
    }

    pub fn too_small() -> Self {
        Self::rejected(
            VerdictKind::TooSmall,
            "Drawing too small. Please draw a bigger arrow.",
        )
    }

    pub fn unanalyzable() -> Self {
        Self::rejected(VerdictKind::UnanalyzableShape, "Could not analyze shape.")
    }

    /// Compare a detected direction against the requested one
    pub fn compare(detected: DirectionLabel, target: DirectionLabel) -> Self {
        if detected == target {
            Self {
                kind: VerdictKind::Match,
                message: format!("Verified! You drew {}.", detected),
                detected: Some(detected),
            }
        } else {
            Self {
                kind: VerdictKind::Mismatch,
                message: format!("Error: You drew {}, but we expected {}.", detected, target),
                detected: Some(detected),
            }
        }
    }

    fn rejected(kind: VerdictKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
            detected: None,
        }
    }

    pub fn is_match(&self) -> bool {
        self.kind == VerdictKind::Match
    }
}
