//! Foreground bounding box
//!
//! Runs all four edge scans against the same buffer and crops once.
//! For any buffer with an opaque pixel this gives exactly the result of
//! [`crate::trim_all`].

use crate::TrimResult;
use alphatrim_core::{Edge, PixelBuffer, Region};

/// Smallest region containing every opaque pixel.
///
/// Returns `None` if the buffer has no opaque pixel.
pub fn foreground_bounds(buf: &PixelBuffer) -> Option<Region> {
    let top = buf.scan_edge(Edge::Top)?.row;
    // The other three scans cannot miss once Top found something
    let bottom = buf.scan_edge(Edge::Bottom)?.row;
    let left = buf.scan_edge(Edge::Left)?.col;
    let right = buf.scan_edge(Edge::Right)?.col;
    Some(Region::new_unchecked(top, left, bottom + 1, right + 1))
}

/// Crop to [`foreground_bounds`] in one step.
///
/// A buffer without opaque pixels is returned unchanged.
pub fn trim_to_bounds(buf: &PixelBuffer) -> TrimResult<PixelBuffer> {
    match foreground_bounds(buf) {
        Some(region) => Ok(buf.crop_region(&region)?),
        None => Ok(buf.clone()),
    }
}

/// `true` if trimming would remove something.
///
/// Only the four border lines are inspected: if each holds an opaque
/// pixel there is no margin. A fully transparent or degenerate buffer
/// reports `false`, since the default trim leaves it unchanged.
pub fn needs_trim(buf: &PixelBuffer) -> bool {
    if buf.is_empty() {
        return false;
    }
    let (w, h) = buf.dimensions();
    let opaque = |row: u32, col: u32| buf.pixel_unchecked(row, col).is_opaque();

    let margin = !(0..w).any(|c| opaque(0, c))
        || !(0..w).any(|c| opaque(h - 1, c))
        || !(0..h).any(|r| opaque(r, 0))
        || !(0..h).any(|r| opaque(r, w - 1));

    margin && buf.scan_edge(Edge::Top).is_some()
}
