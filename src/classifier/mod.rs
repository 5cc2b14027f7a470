//! Classifier Module
//!
//! Decides which of four directions a freehand arrow sketch points to.
//! Pure and stateless: every call stands alone, nothing is cached.
//!
//! ## Structure
//! - `types`: DirectionLabel, VerdictKind, Verdict
//! - `rules`: Thresholds and constants
//! - `buffer`: PixelBuffer with boundary validation
//! - `mask`: Grayscale, binarization, bounding box, moments
//! - `engine`: Classification logic
//!
//! ## Usage
//! ```ignore
//! use secureflow::classifier::{classify, DirectionLabel, PixelBuffer, VerdictKind};
//!
//! let verdict = classify(Some(&buffer), DirectionLabel::Right);
//! match verdict.kind {
//!     VerdictKind::Match => println!("Unlocked"),
//!     _ => println!("{}", verdict.message),
//! }
//! ```

pub mod types;
pub mod rules;
pub mod buffer;
pub mod mask;
pub mod engine;

pub use types::{DirectionLabel, Verdict, VerdictKind, CARDINAL_DIRECTIONS};
pub use rules::{ClassifierThresholds, LUMINANCE_THRESHOLD, MIN_STROKE_SIZE};
pub use buffer::{BufferError, PixelBuffer};
pub use mask::{BoundingBox, Centroid, Moments};
pub use engine::{classify, classify_with_thresholds, detect_direction};

#[cfg(test)]
pub(crate) mod test_support {
    //! Synthetic 300x300 sketches for unit tests

    use super::{DirectionLabel, PixelBuffer};

    pub const WHITE: [u8; 4] = [255, 255, 255, 255];
    pub const BLACK: [u8; 4] = [0, 0, 0, 255];
    const SIZE: u32 = 300;

    pub fn canvas(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::filled(width, height, &WHITE).unwrap()
    }

    pub fn paint(buf: &mut PixelBuffer, color: [u8; 4], inside: impl Fn(u32, u32) -> bool) {
        for y in 0..buf.height() {
            for x in 0..buf.width() {
                if inside(x, y) {
                    buf.set_pixel(x, y, &color);
                }
            }
        }
    }

    /// Right-pointing arrow in (u, v): thin shaft plus a filled head
    fn in_arrow(u: i64, v: i64) -> bool {
        let shaft = (40..=200).contains(&u) && (143..=157).contains(&v);
        let head = (200..=260).contains(&u) && (v - 150).abs() <= 260 - u;
        shaft || head
    }

    /// Arrow with a heavy head, pointing to `direction`
    pub fn arrow(direction: DirectionLabel) -> PixelBuffer {
        let last = SIZE as i64 - 1;
        let mut buf = canvas(SIZE, SIZE);
        paint(&mut buf, BLACK, |x, y| {
            let (x, y) = (x as i64, y as i64);
            let (u, v) = match direction {
                DirectionLabel::Right => (x, y),
                DirectionLabel::Left => (last - x, y),
                DirectionLabel::Down => (y, x),
                DirectionLabel::Up => (last - y, x),
                DirectionLabel::Unknown => return false,
            };
            in_arrow(u, v)
        });
        buf
    }

    /// Solid triangle, apex (250,150), base corners (50,100) and (50,200)
    pub fn solid_triangle() -> PixelBuffer {
        let mut buf = canvas(SIZE, SIZE);
        paint(&mut buf, BLACK, |x, y| {
            let (u, v) = (x as i64, y as i64);
            (50..=250).contains(&u) && (v - 150).abs() * 200 <= 50 * (250 - u)
        });
        buf
    }
}
