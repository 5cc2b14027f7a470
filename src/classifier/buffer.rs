//! Pixel Buffer
//!
//! Raw RGB/RGBA canvas as captured by the drawing surface.
//! Validated once at construction so the classifier never sees a malformed grid.

use thiserror::Error;

/// Reasons a buffer is refused at the boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("buffer width and height must both be positive")]
    ZeroDimension,

    #[error("unsupported channel count {0} (expected 3 or 4)")]
    UnsupportedChannels(u8),

    #[error("pixel data length {actual} does not match {expected} (width * height * channels)")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Row-major 8-bit pixel grid, origin top-left
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::ZeroDimension);
        }
        if channels != 3 && channels != 4 {
            return Err(BufferError::UnsupportedChannels(channels));
        }

        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Iterate pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.channels as usize)
    }
}

// Canvas construction for tests
#[cfg(test)]
impl PixelBuffer {
    /// Uniformly colored canvas; `color` is repeated for every pixel
    pub(crate) fn filled(width: u32, height: u32, color: &[u8]) -> Result<Self, BufferError> {
        let channels = u8::try_from(color.len())
            .map_err(|_| BufferError::UnsupportedChannels(u8::MAX))?;
        let count = width as usize * height as usize;
        let data = color.repeat(count);
        Self::new(width, height, channels, data)
    }

    /// Channels of the pixel at (x, y); None when out of bounds
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = self.offset(x, y);
        Some(&self.data[start..start + self.channels as usize])
    }

    /// Overwrite the leading channels of one pixel; out-of-bounds writes are ignored
    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, color: &[u8]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let start = self.offset(x, y);
        let n = color.len().min(self.channels as usize);
        self.data[start..start + n].copy_from_slice(&color[..n]);
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels as usize
    }
}
