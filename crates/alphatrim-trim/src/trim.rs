//! Edge trimming
//!
//! Each single-edge trim scans from its edge, turns the first opaque
//! pixel into a crop bound and crops once:
//!
//! | Edge   | Found at      | Kept rows / cols        |
//! |--------|---------------|-------------------------|
//! | Top    | row `r`       | rows `r..height`        |
//! | Bottom | row `r`       | rows `0..r + 1`         |
//! | Left   | col `c`       | cols `c..width`         |
//! | Right  | col `c`       | cols `0..c + 1`         |
//!
//! [`trim_all`] chains the four, each scanning the previous result.
//! Every function returns a new buffer; the input is never modified.

use crate::options::{EmptyPolicy, TrimOptions};
use crate::TrimResult;
use alphatrim_core::{Edge, PixelBuffer, Region};

/// Remove the transparent rows above the first opaque pixel.
pub fn trim_top(buf: &PixelBuffer) -> TrimResult<PixelBuffer> {
    trim_edge(buf, Edge::Top)
}

/// Remove the transparent rows below the last opaque pixel.
pub fn trim_bottom(buf: &PixelBuffer) -> TrimResult<PixelBuffer> {
    trim_edge(buf, Edge::Bottom)
}

/// Remove the transparent columns left of the first opaque pixel.
pub fn trim_left(buf: &PixelBuffer) -> TrimResult<PixelBuffer> {
    trim_edge(buf, Edge::Left)
}

/// Remove the transparent columns right of the last opaque pixel.
pub fn trim_right(buf: &PixelBuffer) -> TrimResult<PixelBuffer> {
    trim_edge(buf, Edge::Right)
}

/// Remove the transparent margin along one edge.
///
/// A fully transparent buffer is returned unchanged; use
/// [`trim_with_options`] with [`EmptyPolicy::Collapse`] to shrink it
/// instead.
pub fn trim_edge(buf: &PixelBuffer, edge: Edge) -> TrimResult<PixelBuffer> {
    trim_edge_with(buf, edge, EmptyPolicy::Keep)
}

/// Remove the transparent margin along all four edges.
///
/// Applies Top, Bottom, Left and Right in that order, each on the output
/// of the previous one. The result is the crop of the input to the
/// bounding box of its opaque pixels.
///
/// # Examples
///
/// ```
/// use alphatrim_core::{PixelBuffer, Rgba};
/// use alphatrim_trim::trim_all;
///
/// let mut m = PixelBuffer::new(5, 5).unwrap().to_mut();
/// m.set_pixel(2, 3, Rgba::opaque(10, 20, 30)).unwrap();
/// let buf: PixelBuffer = m.into();
///
/// let trimmed = trim_all(&buf).unwrap();
/// assert_eq!(trimmed.dimensions(), (1, 1));
/// assert_eq!(trimmed.pixel(0, 0), Some(Rgba::opaque(10, 20, 30)));
/// ```
pub fn trim_all(buf: &PixelBuffer) -> TrimResult<PixelBuffer> {
    trim_with_options(buf, &TrimOptions::default())
}

/// Trim the edges selected in `options`, in Top, Bottom, Left, Right
/// order.
pub fn trim_with_options(buf: &PixelBuffer, options: &TrimOptions) -> TrimResult<PixelBuffer> {
    let mut out = buf.clone();
    for edge in options.edges.iter() {
        out = trim_edge_with(&out, edge, options.empty)?;
    }
    Ok(out)
}

fn trim_edge_with(buf: &PixelBuffer, edge: Edge, empty: EmptyPolicy) -> TrimResult<PixelBuffer> {
    // Nothing to scan and nothing to crop
    if buf.is_empty() {
        return Ok(buf.clone());
    }
    let region = edge_region(buf, edge, empty);
    Ok(buf.crop_region(&region)?)
}

/// Region kept by a single-edge trim.
fn edge_region(buf: &PixelBuffer, edge: Edge, empty: EmptyPolicy) -> Region {
    let (w, h) = buf.dimensions();

    match (buf.scan_edge(edge), empty) {
        (Some(p), _) => match edge {
            Edge::Top => Region::new_unchecked(p.row, 0, h, w),
            Edge::Bottom => Region::new_unchecked(0, 0, p.row + 1, w),
            Edge::Left => Region::new_unchecked(0, p.col, h, w),
            Edge::Right => Region::new_unchecked(0, 0, h, p.col + 1),
        },
        (None, EmptyPolicy::Keep) => Region::full(w, h),
        // The line the scan started from; w and h are non-zero here
        (None, EmptyPolicy::Collapse) => match edge {
            Edge::Top => Region::new_unchecked(0, 0, 1, w),
            Edge::Bottom => Region::new_unchecked(h - 1, 0, h, w),
            Edge::Left => Region::new_unchecked(0, 0, h, 1),
            Edge::Right => Region::new_unchecked(0, w - 1, h, w),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::EdgeSet;
    use alphatrim_core::Rgba;

    fn with_opaque(w: u32, h: u32, points: &[(u32, u32)]) -> PixelBuffer {
        let mut m = PixelBuffer::new(w, h).unwrap().to_mut();
        for &(row, col) in points {
            m.set_pixel(row, col, Rgba::new(row as u8, col as u8, 0, 255))
                .unwrap();
        }
        m.into()
    }

    #[test]
    fn test_trim_single_edges() {
        // Opaque block at rows 1..3, cols 2..4 of a 6x5 buffer
        let buf = with_opaque(6, 5, &[(1, 2), (2, 3)]);
        assert_eq!(trim_top(&buf).unwrap().dimensions(), (6, 4));
        assert_eq!(trim_bottom(&buf).unwrap().dimensions(), (6, 3));
        assert_eq!(trim_left(&buf).unwrap().dimensions(), (4, 5));
        assert_eq!(trim_right(&buf).unwrap().dimensions(), (4, 5));
    }

    #[test]
    fn test_trim_keeps_found_line() {
        let buf = with_opaque(4, 4, &[(3, 3)]);
        let t = trim_bottom(&buf).unwrap();
        assert_eq!(t.dimensions(), (4, 4));
        let t = trim_right(&buf).unwrap();
        assert_eq!(t.dimensions(), (4, 4));
        let t = trim_top(&buf).unwrap();
        assert_eq!(t.dimensions(), (4, 1));
        assert_eq!(t.pixel(0, 3), Some(Rgba::new(3, 3, 0, 255)));
    }

    #[test]
    fn test_trim_all_single_pixel() {
        let buf = with_opaque(5, 5, &[(2, 3)]);
        let t = trim_all(&buf).unwrap();
        assert_eq!(t.dimensions(), (1, 1));
        assert_eq!(t.pixel(0, 0), buf.pixel(2, 3));
    }

    #[test]
    fn test_trim_transparent_keep() {
        let buf = PixelBuffer::new(4, 3).unwrap();
        for edge in Edge::ALL {
            assert_eq!(trim_edge(&buf, edge).unwrap(), buf);
        }
        assert_eq!(trim_all(&buf).unwrap(), buf);
    }

    #[test]
    fn test_trim_transparent_collapse() {
        let buf = PixelBuffer::new(4, 3).unwrap();
        let opts = TrimOptions::with_empty(EmptyPolicy::Collapse);
        for edge in Edge::ALL {
            let t = trim_with_options(&buf, &opts.edges(EdgeSet::only(edge))).unwrap();
            if edge.is_horizontal() {
                assert_eq!(t.dimensions(), (4, 1));
            } else {
                assert_eq!(t.dimensions(), (1, 3));
            }
            assert!(t.data().iter().all(|&s| s == 0));
        }
        assert_eq!(trim_with_options(&buf, &opts).unwrap().dimensions(), (1, 1));
    }

    #[test]
    fn test_trim_collapse_keeps_scanned_from_line() {
        // Transparent, but every pixel's colour records where it came from
        let mut m = PixelBuffer::new(3, 3).unwrap().to_mut();
        for row in 0..3 {
            for col in 0..3 {
                m.set_pixel_unchecked(row, col, Rgba::new(row as u8 * 10, col as u8 * 10, 0, 0));
            }
        }
        let buf: PixelBuffer = m.into();
        let opts = TrimOptions::with_empty(EmptyPolicy::Collapse);

        let t = trim_with_options(&buf, &opts.edges(EdgeSet::only(Edge::Top))).unwrap();
        assert_eq!(t.row_data(0), buf.row_data(0));
        let t = trim_with_options(&buf, &opts.edges(EdgeSet::only(Edge::Bottom))).unwrap();
        assert_eq!(t.row_data(0), buf.row_data(2));
        let t = trim_with_options(&buf, &opts.edges(EdgeSet::only(Edge::Left))).unwrap();
        assert_eq!(t.pixel(1, 0), Some(Rgba::new(10, 0, 0, 0)));
        let t = trim_with_options(&buf, &opts.edges(EdgeSet::only(Edge::Right))).unwrap();
        assert_eq!(t.pixel(0, 0), Some(Rgba::new(0, 20, 0, 0)));
        assert_eq!(t.pixel(2, 0), Some(Rgba::new(20, 20, 0, 0)));
    }

    #[test]
    fn test_trim_degenerate_unchanged() {
        for (w, h) in [(0, 0), (0, 4), (4, 0)] {
            let buf = PixelBuffer::new(w, h).unwrap();
            assert_eq!(trim_all(&buf).unwrap(), buf);
            let opts = TrimOptions::with_empty(EmptyPolicy::Collapse);
            assert_eq!(trim_with_options(&buf, &opts).unwrap(), buf);
        }
    }

    #[test]
    fn test_trim_no_edges_is_identity() {
        let buf = with_opaque(5, 5, &[(2, 2)]);
        let opts = TrimOptions::with_edges(EdgeSet::NONE);
        assert_eq!(trim_with_options(&buf, &opts).unwrap(), buf);
    }

    #[test]
    fn test_trim_does_not_modify_input() {
        let buf = with_opaque(5, 5, &[(2, 2)]);
        let before = buf.data().to_vec();
        let _ = trim_all(&buf).unwrap();
        assert_eq!(buf.data(), &before[..]);
    }
}
