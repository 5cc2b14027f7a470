//! Drawing payload models

use serde::{Deserialize, Serialize};

use crate::classifier::{DirectionLabel, PixelBuffer, Verdict, VerdictKind};
use crate::error::AppError;

/// Raw canvas as sent by the drawing surface: row-major, 8 bits per channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingPayload {
    pub width: u32,
    pub height: u32,
    /// 3 (RGB) or 4 (RGBA)
    pub channels: u8,
    pub pixels: Vec<u8>,
}

impl DrawingPayload {
    /// Check the canvas size limit, then build the validated buffer
    pub fn into_buffer(self, max_pixels: u64) -> Result<PixelBuffer, AppError> {
        let area = self.width as u64 * self.height as u64;
        if area > max_pixels {
            return Err(AppError::ValidationError(format!(
                "canvas {}x{} exceeds limit of {} pixels",
                self.width, self.height, max_pixels
            )));
        }

        Ok(PixelBuffer::new(self.width, self.height, self.channels, self.pixels)?)
    }
}

/// Stateless classification request
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub target: DirectionLabel,
    #[serde(default)]
    pub drawing: Option<DrawingPayload>,
}

/// Verdict for API response
#[derive(Debug, Serialize, Deserialize)]
pub struct VerdictResponse {
    pub kind: VerdictKind,
    pub is_match: bool,
    pub message: String,
    pub detected: Option<DirectionLabel>,
}

impl From<Verdict> for VerdictResponse {
    fn from(verdict: Verdict) -> Self {
        Self {
            is_match: verdict.is_match(),
            kind: verdict.kind,
            message: verdict.message,
            detected: verdict.detected,
        }
    }
}
