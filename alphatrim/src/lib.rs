//! alphatrim - Trim transparent borders from RGBA pixel buffers
//!
//! Finds the smallest rectangle holding every pixel with non-zero alpha
//! and crops a buffer to it, either on all edges at once or one edge at a
//! time.
//!
//! # Example
//!
//! ```
//! use alphatrim::{PixelBuffer, Rgba};
//! use alphatrim::trim::trim_all;
//!
//! let mut m = PixelBuffer::new(8, 6).unwrap().to_mut();
//! m.set_pixel(1, 2, Rgba::opaque(255, 0, 0)).unwrap();
//! m.set_pixel(4, 5, Rgba::opaque(0, 0, 255)).unwrap();
//! let buf: PixelBuffer = m.into();
//!
//! let trimmed = trim_all(&buf).unwrap();
//! assert_eq!(trimmed.dimensions(), (4, 4));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use alphatrim_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use alphatrim_io as io;
pub use alphatrim_trim as trim;
