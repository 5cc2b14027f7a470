//! Mask Operations
//!
//! Numeric helpers used by the classifier:
//! - `grayscale`: channel reduction (alpha ignored)
//! - `binarize`: inverted fixed threshold, dark ink becomes foreground
//! - `Mask::bounding_box`: minimal rectangle around ink
//! - `Mask::moments`: zeroth and first spatial moments over a region

use super::buffer::PixelBuffer;
use super::rules::{GRAY_B_WEIGHT, GRAY_G_WEIGHT, GRAY_R_WEIGHT, GRAY_SHIFT, INK_VALUE};

/// Single-channel 8-bit grid, same geometry as its source buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// Axis-aligned rectangle in mask coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Raw image moments of a region, coordinates relative to the region origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
}

/// Center of mass relative to the region origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    pub cx: f64,
    pub cy: f64,
}

// ============================================================================
// CHANNEL REDUCTION
// ============================================================================

/// Luminance of one RGB triple, rounded to nearest
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let weighted = r as u32 * GRAY_R_WEIGHT + g as u32 * GRAY_G_WEIGHT + b as u32 * GRAY_B_WEIGHT;
    let rounded = (weighted + (1 << (GRAY_SHIFT - 1))) >> GRAY_SHIFT;
    rounded.min(255) as u8
}

/// Reduce an RGB/RGBA buffer to luminance; the fourth channel never contributes
pub fn grayscale(buffer: &PixelBuffer) -> Mask {
    let data = buffer
        .pixels()
        .map(|px| luminance(px[0], px[1], px[2]))
        .collect();

    Mask {
        width: buffer.width(),
        height: buffer.height(),
        data,
    }
}

/// Inverted binary threshold: value <= threshold becomes ink, everything else background
pub fn binarize(gray: &Mask, threshold: u8) -> Mask {
    let data = gray
        .data
        .iter()
        .map(|&v| if v <= threshold { INK_VALUE } else { 0 })
        .collect();

    Mask {
        width: gray.width,
        height: gray.height,
        data,
    }
}

// ============================================================================
// MASK QUERIES
// ============================================================================

impl Mask {
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Minimal rectangle enclosing every non-zero cell, None for an empty mask
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut min_x = u32::MAX;
        let mut min_y = u32::MAX;
        let mut max_x = 0u32;
        let mut max_y = 0u32;
        let mut found = false;

        for (y, row) in self.data.chunks_exact(self.width as usize).enumerate() {
            for (x, &v) in row.iter().enumerate() {
                if v == 0 {
                    continue;
                }
                let (x, y) = (x as u32, y as u32);
                found = true;
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }

        found.then(|| BoundingBox {
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        })
    }

    /// Intensity-weighted moments over `region`, coordinates relative to its top-left corner
    pub fn moments(&self, region: &BoundingBox) -> Moments {
        let mut m = Moments {
            m00: 0.0,
            m10: 0.0,
            m01: 0.0,
        };

        for dy in 0..region.height {
            for dx in 0..region.width {
                let v = self.get(region.x + dx, region.y + dy);
                if v == 0 {
                    continue;
                }
                let w = v as f64;
                m.m00 += w;
                m.m10 += dx as f64 * w;
                m.m01 += dy as f64 * w;
            }
        }

        m
    }
}

impl Moments {
    /// None when the region carries no mass
    pub fn centroid(&self) -> Option<Centroid> {
        if self.m00 == 0.0 {
            return None;
        }
        Some(Centroid {
            cx: self.m10 / self.m00,
            cy: self.m01 / self.m00,
        })
    }
}
