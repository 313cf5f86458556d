//! Rectangle cropping
//!
//! Copies a rectangular sub-region of a buffer into a new buffer. Bounds
//! are pixel indices in both axes.

use super::access::offset;
use super::{CHANNELS, PixelBuffer};
use crate::Region;
use crate::error::Result;

impl PixelBuffer {
    /// Extract rows `row_start..row_end` and columns `col_start..col_end`
    /// into a new buffer.
    ///
    /// Output pixel `(r, c)` equals input pixel `(row_start + r,
    /// col_start + c)`. The input is never modified.
    ///
    /// A zero extent along an axis is widened to one pixel, so the result
    /// is never 0 wide or 0 tall; image encoders reject such images. The
    /// widened line copies the source line at the start bound when it
    /// exists and is transparent when the start bound equals the buffer
    /// dimension.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidRegion`] if an end bound is smaller
    /// than its start bound or reaches past the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use alphatrim_core::{PixelBuffer, Rgba};
    ///
    /// let mut m = PixelBuffer::new(10, 8).unwrap().to_mut();
    /// m.set_pixel(4, 5, Rgba::opaque(9, 9, 9)).unwrap();
    /// let buf: PixelBuffer = m.into();
    ///
    /// let cropped = buf.crop(3, 2, 6, 7).unwrap();
    /// assert_eq!(cropped.dimensions(), (5, 3));
    /// assert_eq!(cropped.pixel(1, 3), Some(Rgba::opaque(9, 9, 9)));
    /// ```
    pub fn crop(&self, row_start: u32, col_start: u32, row_end: u32, col_end: u32) -> Result<PixelBuffer> {
        let region = Region::new(row_start, col_start, row_end, col_end)?;
        self.crop_region(&region)
    }

    /// Same as [`PixelBuffer::crop`], taking the bounds as a [`Region`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidRegion`] if `region` does not fit the
    /// buffer.
    pub fn crop_region(&self, region: &Region) -> Result<PixelBuffer> {
        region.check_within(self.width(), self.height())?;

        if *region == Region::full(self.width(), self.height()) && !self.is_empty() {
            return Ok(self.clone());
        }

        let out_h = region.height().max(1);
        let out_w = region.width().max(1);
        let mut out = PixelBuffer::new(out_w, out_h)?.to_mut();

        // Part of the (possibly widened) rectangle backed by source pixels
        let src_row_end = region.row_start.saturating_add(out_h).min(self.height());
        let src_col_end = region.col_start.saturating_add(out_w).min(self.width());

        if src_col_end > region.col_start {
            let line = (src_col_end - region.col_start) as usize * CHANNELS;
            let dst_stride = out_w as usize * CHANNELS;
            let src = self.data();
            for (i, row) in (region.row_start..src_row_end).enumerate() {
                let s = offset(self.width(), row, region.col_start);
                let d = i * dst_stride;
                out.data_mut()[d..d + line].copy_from_slice(&src[s..s + line]);
            }
        }

        Ok(out.into())
    }
}
