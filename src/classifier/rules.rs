//! Classification Rules & Thresholds
//!
//! Fixed policy values for the direction classifier.
//! No classify logic here - constants and config only.

use serde::{Deserialize, Serialize};

// ============================================================================
// THRESHOLDS (defaults)
// ============================================================================

/// Luminance at or below this value counts as ink (0-255 scale)
pub const LUMINANCE_THRESHOLD: u8 = 100;

/// Minimum ink bounding box width and height, in pixels
pub const MIN_STROKE_SIZE: u32 = 30;

/// Mask value written for ink pixels
pub const INK_VALUE: u8 = 255;

// ============================================================================
// GRAYSCALE WEIGHTS (14-bit fixed point of 0.299 / 0.587 / 0.114)
// ============================================================================

pub const GRAY_SHIFT: u32 = 14;
pub const GRAY_R_WEIGHT: u32 = 4899;
pub const GRAY_G_WEIGHT: u32 = 9617;
pub const GRAY_B_WEIGHT: u32 = 1868;

// ============================================================================
// CONFIGURABLE THRESHOLDS
// ============================================================================

/// Tunable classifier thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierThresholds {
    /// Inclusive ink cutoff
    pub luminance_threshold: u8,
    /// Size floor applied to both bounding box axes
    pub min_stroke_size: u32,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            luminance_threshold: LUMINANCE_THRESHOLD,
            min_stroke_size: MIN_STROKE_SIZE,
        }
    }
}

impl ClassifierThresholds {
    pub fn new(luminance_threshold: u8, min_stroke_size: u32) -> Self {
        Self {
            luminance_threshold,
            min_stroke_size,
        }
    }

    /// A zero size floor would let single-pixel taps through
    pub fn validate(&self) -> Result<(), String> {
        if self.min_stroke_size == 0 {
            return Err("min_stroke_size must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let t = ClassifierThresholds::default();
        assert_eq!(t.luminance_threshold, 100);
        assert_eq!(t.min_stroke_size, 30);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_gray_weights_sum_to_unity() {
        assert_eq!(GRAY_R_WEIGHT + GRAY_G_WEIGHT + GRAY_B_WEIGHT, 1 << GRAY_SHIFT);
    }

    #[test]
    fn test_zero_floor_rejected() {
        assert!(ClassifierThresholds::new(100, 0).validate().is_err());
    }
}
