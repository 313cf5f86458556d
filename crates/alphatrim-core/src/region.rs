//! Region - Rectangular sub-areas of a pixel buffer
//!
//! Regions are half-open in both axes and measured in pixels:
//! rows `row_start..row_end`, columns `col_start..col_end`.

use crate::error::{Error, Result};

/// A half-open rectangle of pixels.
///
/// Small and frequently copied, so it is a plain `Copy` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// First row (inclusive)
    pub row_start: u32,
    /// First column (inclusive)
    pub col_start: u32,
    /// Last row (exclusive)
    pub row_end: u32,
    /// Last column (exclusive)
    pub col_end: u32,
}

impl Region {
    /// Create a new region.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if an end bound is smaller than its
    /// start bound.
    pub fn new(row_start: u32, col_start: u32, row_end: u32, col_end: u32) -> Result<Self> {
        if row_end < row_start || col_end < col_start {
            return Err(Error::InvalidRegion(format!(
                "reversed bounds: rows {}..{}, cols {}..{}",
                row_start, row_end, col_start, col_end
            )));
        }
        Ok(Self::new_unchecked(row_start, col_start, row_end, col_end))
    }

    /// Create a region without validation
    pub const fn new_unchecked(row_start: u32, col_start: u32, row_end: u32, col_end: u32) -> Self {
        Self {
            row_start,
            col_start,
            row_end,
            col_end,
        }
    }

    /// The region covering a whole `width` x `height` buffer.
    pub const fn full(width: u32, height: u32) -> Self {
        Self::new_unchecked(0, 0, height, width)
    }

    /// Number of rows
    #[inline]
    pub fn height(&self) -> u32 {
        self.row_end - self.row_start
    }

    /// Number of columns
    #[inline]
    pub fn width(&self) -> u32 {
        self.col_end - self.col_start
    }

    /// `true` if the region covers no pixel
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.row_end == self.row_start || self.col_end == self.col_start
    }

    /// Check whether pixel `(row, col)` lies inside the region
    pub fn contains(&self, row: u32, col: u32) -> bool {
        (self.row_start..self.row_end).contains(&row) && (self.col_start..self.col_end).contains(&col)
    }

    /// `true` if the region lies inside a `width` x `height` buffer.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.row_start <= self.row_end
            && self.col_start <= self.col_end
            && self.row_end <= height
            && self.col_end <= width
    }

    /// Like [`Region::fits_within`], reporting the offending bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if the region is reversed or
    /// reaches past the buffer.
    pub fn check_within(&self, width: u32, height: u32) -> Result<()> {
        if self.fits_within(width, height) {
            return Ok(());
        }
        Err(Error::InvalidRegion(format!(
            "rows {}..{}, cols {}..{} do not fit a {}x{} buffer",
            self.row_start, self.row_end, self.col_start, self.col_end, width, height
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_new() {
        let r = Region::new(1, 2, 4, 7).unwrap();
        assert_eq!(r.height(), 3);
        assert_eq!(r.width(), 5);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_region_reversed() {
        assert!(Region::new(3, 0, 2, 1).is_err());
        assert!(Region::new(0, 3, 1, 2).is_err());
        // Zero extent is allowed
        assert!(Region::new(2, 2, 2, 2).unwrap().is_empty());
    }

    #[test]
    fn test_region_contains() {
        let r = Region::new(1, 1, 3, 3).unwrap();
        assert!(r.contains(1, 1));
        assert!(r.contains(2, 2));
        assert!(!r.contains(3, 2));
        assert!(!r.contains(0, 1));
    }

    #[test]
    fn test_region_fits_within() {
        assert!(Region::full(4, 3).fits_within(4, 3));
        assert!(!Region::full(4, 3).fits_within(3, 3));
        assert!(Region::new(3, 4, 3, 4).unwrap().fits_within(4, 3));
        assert!(!Region::new_unchecked(2, 0, 1, 1).fits_within(4, 3));
        assert!(Region::full(4, 3).check_within(2, 2).is_err());
    }
}
