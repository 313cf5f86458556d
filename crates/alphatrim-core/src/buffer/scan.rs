//! Edge scanning
//!
//! Walks a buffer inward from one edge and stops at the first opaque
//! pixel. The outer loop runs along the axis being measured (rows for
//! Top/Bottom, columns for Left/Right); the inner loop only has to prove
//! that a line contains some opaque pixel, so it short-circuits on the
//! first hit.
//!
//! | Edge   | Outer                  | Inner                  |
//! |--------|------------------------|------------------------|
//! | Top    | row 0 → height-1       | col 0 → width-1        |
//! | Bottom | row height-1 → 0       | col width-1 → 0        |
//! | Left   | col 0 → width-1        | row 0 → height-1       |
//! | Right  | col width-1 → 0        | row height-1 → 0       |

use super::PixelBuffer;
use crate::Region;
use crate::error::Result;

/// Side of a buffer from which a scan proceeds inward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Scan from the top row downward
    Top,
    /// Scan from the bottom row upward
    Bottom,
    /// Scan from the left column rightward
    Left,
    /// Scan from the right column leftward
    Right,
}

impl Edge {
    /// All edges, in the order a full trim applies them.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// `true` for Top and Bottom, whose scans measure a row.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }
}

/// Pixel coordinate reported by a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Row index (0 = top)
    pub row: u32,
    /// Column index (0 = left)
    pub col: u32,
}

impl Position {
    /// Create a position.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl PixelBuffer {
    /// Find the first opaque pixel met when walking in from `edge`.
    ///
    /// Returns `None` if the buffer has no opaque pixel, which includes
    /// every degenerate (zero width or height) buffer. Only the coordinate
    /// along the edge's own axis is meaningful as a bound: the row for
    /// Top/Bottom, the column for Left/Right.
    ///
    /// # Examples
    ///
    /// ```
    /// use alphatrim_core::{Edge, PixelBuffer, Position, Rgba};
    ///
    /// let mut m = PixelBuffer::new(5, 5).unwrap().to_mut();
    /// m.set_pixel(2, 3, Rgba::opaque(1, 2, 3)).unwrap();
    /// let buf: PixelBuffer = m.into();
    ///
    /// assert_eq!(buf.scan_edge(Edge::Top), Some(Position::new(2, 3)));
    /// assert_eq!(buf.scan_edge(Edge::Left), Some(Position::new(2, 3)));
    /// ```
    pub fn scan_edge(&self, edge: Edge) -> Option<Position> {
        self.scan_region(&Region::full(self.width(), self.height()), edge)
    }

    /// Same as [`PixelBuffer::scan_edge`], restricted to `region`.
    ///
    /// Coordinates are reported in buffer space, not relative to the
    /// region.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidRegion`] if `region` does not fit the
    /// buffer.
    pub fn scan_edge_in(&self, region: &Region, edge: Edge) -> Result<Option<Position>> {
        region.check_within(self.width(), self.height())?;
        Ok(self.scan_region(region, edge))
    }

    fn scan_region(&self, region: &Region, edge: Edge) -> Option<Position> {
        let rows = region.row_start..region.row_end;
        let cols = region.col_start..region.col_end;

        match edge {
            Edge::Top => {
                for row in rows {
                    for col in cols.clone() {
                        if self.is_opaque_at(row, col) {
                            return Some(Position { row, col });
                        }
                    }
                }
            }
            Edge::Bottom => {
                for row in rows.rev() {
                    for col in cols.clone().rev() {
                        if self.is_opaque_at(row, col) {
                            return Some(Position { row, col });
                        }
                    }
                }
            }
            Edge::Left => {
                for col in cols {
                    for row in rows.clone() {
                        if self.is_opaque_at(row, col) {
                            return Some(Position { row, col });
                        }
                    }
                }
            }
            Edge::Right => {
                for col in cols.rev() {
                    for row in rows.clone().rev() {
                        if self.is_opaque_at(row, col) {
                            return Some(Position { row, col });
                        }
                    }
                }
            }
        }

        None
    }
}
