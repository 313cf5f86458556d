//! Buffer comparison
//!
//! Pixel-exact comparison of two buffers, used by the regression harness
//! to report where two results diverge.

use super::{PixelBuffer, Position, Rgba};
use crate::error::{Error, Result};

/// Summary of the differences between two equally sized buffers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferDiff {
    /// Number of pixels that differ
    pub n_diff: u64,
    /// First differing pixel in row-major order, with both values
    pub first: Option<(Position, Rgba, Rgba)>,
}

impl BufferDiff {
    /// `true` if no pixel differs.
    pub fn is_equal(&self) -> bool {
        self.n_diff == 0
    }
}

impl PixelBuffer {
    /// Compare every pixel against `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the buffers differ in size.
    pub fn compare(&self, other: &PixelBuffer) -> Result<BufferDiff> {
        if !self.sizes_equal(other) {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }

        let mut diff = BufferDiff {
            n_diff: 0,
            first: None,
        };
        for row in 0..self.height() {
            for col in 0..self.width() {
                let a = self.pixel_unchecked(row, col);
                let b = other.pixel_unchecked(row, col);
                if a != b {
                    diff.n_diff += 1;
                    if diff.first.is_none() {
                        diff.first = Some((Position::new(row, col), a, b));
                    }
                }
            }
        }
        Ok(diff)
    }

    /// Position of the first differing pixel, or `None` if the buffers
    /// are equal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the buffers differ in size.
    pub fn first_difference(&self, other: &PixelBuffer) -> Result<Option<Position>> {
        Ok(self.compare(other)?.first.map(|(pos, _, _)| pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_equal() {
        let a = PixelBuffer::filled(3, 2, Rgba::opaque(1, 2, 3)).unwrap();
        let b = PixelBuffer::filled(3, 2, Rgba::opaque(1, 2, 3)).unwrap();
        let diff = a.compare(&b).unwrap();
        assert!(diff.is_equal());
        assert_eq!(diff.first, None);
    }

    #[test]
    fn test_compare_counts_differences() {
        let a = PixelBuffer::new(3, 2).unwrap();
        let mut m = a.to_mut();
        m.set_pixel(1, 0, Rgba::opaque(5, 5, 5)).unwrap();
        m.set_pixel(1, 2, Rgba::opaque(5, 5, 5)).unwrap();
        let b: PixelBuffer = m.into();

        let diff = a.compare(&b).unwrap();
        assert_eq!(diff.n_diff, 2);
        assert_eq!(
            diff.first,
            Some((Position::new(1, 0), Rgba::TRANSPARENT, Rgba::opaque(5, 5, 5)))
        );
        assert_eq!(a.first_difference(&b).unwrap(), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_compare_size_mismatch() {
        let a = PixelBuffer::new(3, 2).unwrap();
        let b = PixelBuffer::new(2, 3).unwrap();
        assert_eq!(
            a.compare(&b),
            Err(Error::DimensionMismatch {
                expected: (3, 2),
                actual: (2, 3)
            })
        );
    }
}
