//! Pixel access functions
//!
//! Read-only accessors for [`PixelBuffer`] and setters for
//! [`PixelBufferMut`]. Scanning only ever reads; setters exist for the
//! code that produces buffers.

use super::{CHANNELS, PixelBuffer, PixelBufferMut, Rgba};
use crate::Region;
use crate::error::{Error, Result};

/// Sample offset of pixel `(row, col)` in a buffer `width` pixels wide.
#[inline]
pub(crate) fn offset(width: u32, row: u32, col: u32) -> usize {
    (row as usize * width as usize + col as usize) * CHANNELS
}

impl PixelBuffer {
    /// Get the pixel at `(row, col)`.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn pixel(&self, row: u32, col: u32) -> Option<Rgba> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        Some(self.pixel_unchecked(row, col))
    }

    /// Get a pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed sample offset lies outside the buffer.
    #[inline]
    pub fn pixel_unchecked(&self, row: u32, col: u32) -> Rgba {
        let i = offset(self.width(), row, col);
        let s = &self.data()[i..i + CHANNELS];
        Rgba::new(s[0], s[1], s[2], s[3])
    }

    /// Get the alpha sample at `(row, col)`.
    pub fn alpha(&self, row: u32, col: u32) -> Option<u8> {
        self.pixel(row, col).map(|p| p.a)
    }

    /// `true` if the pixel at `(row, col)` has non-zero alpha.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub(crate) fn is_opaque_at(&self, row: u32, col: u32) -> bool {
        self.data()[offset(self.width(), row, col) + 3] != 0
    }
}

impl PixelBufferMut {
    /// Get the pixel at `(row, col)`.
    pub fn pixel(&self, row: u32, col: u32) -> Option<Rgba> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        let i = offset(self.width(), row, col);
        let s = &self.data()[i..i + CHANNELS];
        Some(Rgba::new(s[0], s[1], s[2], s[3]))
    }

    /// Set the pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out of
    /// bounds.
    pub fn set_pixel(&mut self, row: u32, col: u32, color: Rgba) -> Result<()> {
        if row >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: row as usize,
                len: self.height() as usize,
            });
        }
        if col >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: col as usize,
                len: self.width() as usize,
            });
        }
        self.set_pixel_unchecked(row, col, color);
        Ok(())
    }

    /// Set a pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed sample offset lies outside the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, row: u32, col: u32, color: Rgba) {
        let i = offset(self.width(), row, col);
        self.data_mut()[i..i + CHANNELS].copy_from_slice(&color.to_array());
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Rgba) {
        let px = color.to_array();
        for chunk in self.data_mut().chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Set every pixel inside `region` to `color`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if `region` does not fit the buffer.
    pub fn fill_region(&mut self, region: &Region, color: Rgba) -> Result<()> {
        region.check_within(self.width(), self.height())?;
        let px = color.to_array();
        let width = self.width();
        for row in region.row_start..region.row_end {
            let start = offset(width, row, region.col_start);
            let end = offset(width, row, region.col_end);
            for chunk in self.data_mut()[start..end].chunks_exact_mut(CHANNELS) {
                chunk.copy_from_slice(&px);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_layout() {
        // 2x2: pixel (1, 0) starts at sample 8
        let data: Vec<u8> = (0..16).collect();
        let buf = PixelBuffer::from_raw(2, 2, data).unwrap();
        assert_eq!(buf.pixel(0, 0), Some(Rgba::new(0, 1, 2, 3)));
        assert_eq!(buf.pixel(0, 1), Some(Rgba::new(4, 5, 6, 7)));
        assert_eq!(buf.pixel(1, 0), Some(Rgba::new(8, 9, 10, 11)));
        assert_eq!(buf.alpha(1, 1), Some(15));
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let buf = PixelBuffer::new(3, 2).unwrap();
        assert_eq!(buf.pixel(2, 0), None);
        assert_eq!(buf.pixel(0, 3), None);
        assert_eq!(buf.alpha(5, 5), None);
    }

    #[test]
    fn test_set_pixel() {
        let mut m = PixelBuffer::new(3, 2).unwrap().to_mut();
        m.set_pixel(1, 2, Rgba::new(1, 2, 3, 4)).unwrap();
        let buf: PixelBuffer = m.into();
        assert_eq!(buf.pixel(1, 2), Some(Rgba::new(1, 2, 3, 4)));
        assert_eq!(&buf.data()[20..24], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut m = PixelBuffer::new(3, 2).unwrap().to_mut();
        assert!(matches!(
            m.set_pixel(2, 0, Rgba::TRANSPARENT),
            Err(Error::IndexOutOfBounds { index: 2, len: 2 })
        ));
        assert!(matches!(
            m.set_pixel(0, 3, Rgba::TRANSPARENT),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_fill_region() {
        let mut m = PixelBuffer::new(4, 4).unwrap().to_mut();
        let red = Rgba::opaque(255, 0, 0);
        m.fill_region(&Region::new(1, 1, 3, 2).unwrap(), red).unwrap();
        let buf: PixelBuffer = m.into();
        for row in 0..4 {
            for col in 0..4 {
                let inside = (1..3).contains(&row) && col == 1;
                assert_eq!(buf.pixel(row, col).unwrap().is_opaque(), inside);
            }
        }
    }

    #[test]
    fn test_fill_region_rejects_oversized() {
        let mut m = PixelBuffer::new(2, 2).unwrap().to_mut();
        let r = Region::new(0, 0, 3, 2).unwrap();
        assert!(matches!(
            m.fill_region(&r, Rgba::TRANSPARENT),
            Err(Error::InvalidRegion(_))
        ));
    }
}
