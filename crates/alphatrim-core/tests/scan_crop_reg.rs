//! Edge scan and crop regression test
//!
//! Run with:
//! ```
//! cargo test -p alphatrim-core --test scan_crop_reg
//! ```

use alphatrim_core::{Edge, Error, PixelBuffer, Position, Region};
use alphatrim_test::{RegParams, fixtures};

#[test]
fn scan_crop_reg() {
    let mut rp = RegParams::new("scan_crop");

    // Two opaque pixels in a 7x6 buffer
    let buf = fixtures::with_opaque_pixels(7, 6, &[(1, 5), (4, 2)]);

    // --- Test 1: scan positions from every edge ---
    let top = buf.scan_edge(Edge::Top).expect("top");
    rp.compare_values(1.0, top.row as f64, 0.0);
    rp.compare_values(5.0, top.col as f64, 0.0);
    let bottom = buf.scan_edge(Edge::Bottom).expect("bottom");
    rp.compare_values(4.0, bottom.row as f64, 0.0);
    rp.compare_values(2.0, bottom.col as f64, 0.0);
    let left = buf.scan_edge(Edge::Left).expect("left");
    rp.compare_values(4.0, left.row as f64, 0.0);
    rp.compare_values(2.0, left.col as f64, 0.0);
    let right = buf.scan_edge(Edge::Right).expect("right");
    rp.compare_values(1.0, right.row as f64, 0.0);
    rp.compare_values(5.0, right.col as f64, 0.0);

    // --- Test 2: crop to the scanned box ---
    let cropped = buf
        .crop(top.row, left.col, bottom.row + 1, right.col + 1)
        .expect("crop");
    rp.compare_values(4.0, cropped.width() as f64, 0.0);
    rp.compare_values(4.0, cropped.height() as f64, 0.0);
    let expected = fixtures::with_opaque_pixels(4, 4, &[(0, 3), (3, 0)]);
    // Fixture colours depend on position, so compare alpha only
    let alpha = |b: &PixelBuffer| -> Vec<u8> { b.data().iter().skip(3).step_by(4).copied().collect() };
    rp.compare_strings(&alpha(&expected), &alpha(&cropped));
    rp.compare_values(1.0, (cropped.pixel(0, 3) == buf.pixel(1, 5)) as u8 as f64, 0.0);

    // --- Test 3: restricted scan reports buffer coordinates ---
    let inner = Region::new(2, 0, 6, 7).unwrap();
    let found = buf.scan_edge_in(&inner, Edge::Top).expect("scan_edge_in");
    rp.compare_values(1.0, (found == Some(Position::new(4, 2))) as u8 as f64, 0.0);

    assert!(rp.cleanup(), "scan_crop regression test failed");
}

/// Output pixel (r, c) of every possible crop equals input pixel
/// (row_start + r, col_start + c).
#[test]
fn crop_matches_direct_indexing() {
    let buf = fixtures::opaque(5, 4);
    for region in fixtures::all_regions(5, 4) {
        let out = buf.crop_region(&region).unwrap();
        assert_eq!(out.dimensions(), (region.width(), region.height()));
        for r in 0..out.height() {
            for c in 0..out.width() {
                assert_eq!(
                    out.pixel(r, c),
                    buf.pixel(region.row_start + r, region.col_start + c),
                    "region {:?} at ({}, {})",
                    region,
                    r,
                    c
                );
            }
        }
    }
}

#[test]
fn crop_rejects_bad_bounds() {
    let buf = fixtures::opaque(4, 4);
    assert!(matches!(buf.crop(3, 0, 2, 4), Err(Error::InvalidRegion(_))));
    assert!(matches!(buf.crop(0, 0, 5, 4), Err(Error::InvalidRegion(_))));
    assert!(matches!(buf.crop(0, 0, 4, 5), Err(Error::InvalidRegion(_))));
}

#[test]
fn crop_zero_extent_is_one_pixel() {
    let buf = fixtures::opaque(4, 3);
    let strip = buf.crop(1, 0, 1, 4).unwrap();
    assert_eq!(strip.dimensions(), (4, 1));
    assert_eq!(strip.row_data(0), buf.row_data(1));

    let past_end = buf.crop(0, 4, 3, 4).unwrap();
    assert_eq!(past_end.dimensions(), (1, 3));
    assert!(past_end.data().iter().all(|&s| s == 0));
}

/// Every single opaque pixel is found by all four scans.
#[test]
fn scan_single_pixel_everywhere() {
    let (w, h) = (6u32, 5u32);
    for row in 0..h {
        for col in 0..w {
            let buf = fixtures::with_opaque_pixels(w, h, &[(row, col)]);
            for edge in Edge::ALL {
                assert_eq!(buf.scan_edge(edge), Some(Position::new(row, col)));
            }
        }
    }
}

#[test]
fn scan_transparent_finds_nothing() {
    for (w, h) in [(0, 0), (3, 0), (1, 1), (5, 4)] {
        let buf = fixtures::transparent(w, h);
        for edge in Edge::ALL {
            assert_eq!(buf.scan_edge(edge), None);
        }
    }
}

#[test]
fn scan_edge_in_rejects_outside_region() {
    let buf = fixtures::opaque(3, 3);
    let region = Region::new(0, 0, 4, 3).unwrap();
    assert!(buf.scan_edge_in(&region, Edge::Left).is_err());
}
