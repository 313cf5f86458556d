//! Synthetic test buffers
//!
//! Trimming only cares about where the opaque pixels are, so tests build
//! their inputs directly instead of loading image files.

use alphatrim_core::{PixelBuffer, Region, Rgba};

/// Colour of pixel `(row, col)` in fixtures: unique per position, always
/// opaque.
pub fn marker(row: u32, col: u32) -> Rgba {
    Rgba::new(row as u8, col as u8, (row * 7 + col * 13) as u8, 255)
}

/// A fully transparent `width` x `height` buffer.
pub fn transparent(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::new(width, height).unwrap()
}

/// A fully transparent buffer whose colour samples still carry each
/// pixel's [`marker`], so tests can tell which lines a crop kept.
pub fn tinted_transparent(width: u32, height: u32) -> PixelBuffer {
    let mut m = transparent(width, height).to_mut();
    for row in 0..height {
        for col in 0..width {
            let Rgba { r, g, b, .. } = marker(row, col);
            m.set_pixel_unchecked(row, col, Rgba::new(r, g, b, 0));
        }
    }
    m.into()
}

/// A buffer where every pixel is opaque and carries its [`marker`].
pub fn opaque(width: u32, height: u32) -> PixelBuffer {
    let mut m = transparent(width, height).to_mut();
    for row in 0..height {
        for col in 0..width {
            m.set_pixel_unchecked(row, col, marker(row, col));
        }
    }
    m.into()
}

/// A transparent buffer with the given `(row, col)` pixels set to their
/// [`marker`].
pub fn with_opaque_pixels(width: u32, height: u32, points: &[(u32, u32)]) -> PixelBuffer {
    let mut m = transparent(width, height).to_mut();
    for &(row, col) in points {
        m.set_pixel(row, col, marker(row, col)).unwrap();
    }
    m.into()
}

/// A transparent buffer with every pixel of `region` set to its
/// [`marker`].
pub fn with_opaque_region(width: u32, height: u32, region: Region) -> PixelBuffer {
    let mut m = transparent(width, height).to_mut();
    for row in region.row_start..region.row_end {
        for col in region.col_start..region.col_end {
            m.set_pixel(row, col, marker(row, col)).unwrap();
        }
    }
    m.into()
}

/// A transparent buffer with a hollow one-pixel frame along `region`'s
/// border: the bounding box is `region`, but its interior is empty.
pub fn with_opaque_frame(width: u32, height: u32, region: Region) -> PixelBuffer {
    let mut m = transparent(width, height).to_mut();
    for row in region.row_start..region.row_end {
        for col in region.col_start..region.col_end {
            let border = row == region.row_start
                || row + 1 == region.row_end
                || col == region.col_start
                || col + 1 == region.col_end;
            if border {
                m.set_pixel(row, col, marker(row, col)).unwrap();
            }
        }
    }
    m.into()
}

/// Every non-empty region of a `width` x `height` buffer.
pub fn all_regions(width: u32, height: u32) -> Vec<Region> {
    let mut out = Vec::new();
    for row_start in 0..height {
        for row_end in row_start + 1..=height {
            for col_start in 0..width {
                for col_end in col_start + 1..=width {
                    out.push(Region::new_unchecked(row_start, col_start, row_end, col_end));
                }
            }
        }
    }
    out
}
