//! alphatrim core - Pixel buffers, edge scanning and cropping
//!
//! This crate provides the data structures and primitives the trimming
//! code is built from:
//!
//! - [`PixelBuffer`] / [`PixelBufferMut`] - RGBA image container
//!   (immutable / mutable)
//! - [`Rgba`] - One pixel; alpha 0 is transparent, anything else opaque
//! - [`Region`] - Half-open pixel rectangle
//! - [`Edge`] / [`Position`] - Scan direction and scan result
//!
//! Scanning ([`PixelBuffer::scan_edge`]) and cropping
//! ([`PixelBuffer::crop`]) are pure: they read their input and return
//! new values.

pub mod buffer;
pub mod error;
pub mod region;

pub use buffer::{BufferDiff, CHANNELS, Edge, PixelBuffer, PixelBufferMut, Position, Rgba};
pub use error::{Error, Result};
pub use region::Region;
