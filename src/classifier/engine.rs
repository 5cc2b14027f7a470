//! Direction Classifier
//!
//! ONLY classify logic - no types, no policy.
//! Input: PixelBuffer (optional), target DirectionLabel
//! Output: Verdict

use super::buffer::PixelBuffer;
use super::mask::{binarize, grayscale, BoundingBox, Centroid};
use super::rules::ClassifierThresholds;
use super::types::{DirectionLabel, Verdict};

// ============================================================================
// MAIN CLASSIFICATION FUNCTION
// ============================================================================

/// Classify a sketch with the default thresholds
///
/// Deterministic: same buffer and target always give the same verdict.
pub fn classify(buffer: Option<&PixelBuffer>, target: DirectionLabel) -> Verdict {
    classify_with_thresholds(buffer, target, &ClassifierThresholds::default())
}

/// Classification with custom thresholds
pub fn classify_with_thresholds(
    buffer: Option<&PixelBuffer>,
    target: DirectionLabel,
    thresholds: &ClassifierThresholds,
) -> Verdict {
    debug_assert!(target.is_cardinal(), "target must be one of the four directions");

    let Some(buffer) = buffer else {
        return Verdict::no_drawing();
    };

    let ink = binarize(&grayscale(buffer), thresholds.luminance_threshold);

    let Some(bbox) = ink.bounding_box() else {
        tracing::debug!("No ink in {}x{} canvas", buffer.width(), buffer.height());
        return Verdict::empty_canvas();
    };

    if bbox.width < thresholds.min_stroke_size || bbox.height < thresholds.min_stroke_size {
        tracing::debug!(
            "Ink box {}x{} below floor {}",
            bbox.width,
            bbox.height,
            thresholds.min_stroke_size
        );
        return Verdict::too_small();
    }

    let Some(centroid) = ink.moments(&bbox).centroid() else {
        return Verdict::unanalyzable();
    };

    let detected = detect_direction(&bbox, &centroid);

    tracing::debug!(
        "bbox=({}, {}, {}x{}) centroid=({:.2}, {:.2}) detected={} target={}",
        bbox.x,
        bbox.y,
        bbox.width,
        bbox.height,
        centroid.cx,
        centroid.cy,
        detected,
        target
    );

    Verdict::compare(detected, target)
}

/// Axis from the box aspect, polarity from the half holding the center of mass
///
/// A square box falls on the vertical branch.
pub fn detect_direction(bbox: &BoundingBox, centroid: &Centroid) -> DirectionLabel {
    let w = bbox.width as f64;
    let h = bbox.height as f64;

    if bbox.width > bbox.height {
        if centroid.cx > w / 2.0 {
            DirectionLabel::Right
        } else {
            DirectionLabel::Left
        }
    } else if centroid.cy > h / 2.0 {
        DirectionLabel::Down
    } else {
        DirectionLabel::Up
    }
}

// ============================================================================
// TESTS
// ============================================================================
