//! alphatrim-trim - Transparent border trimming
//!
//! This crate removes transparent margins from [`PixelBuffer`]s:
//!
//! - Single-edge trims ([`trim_top`], [`trim_bottom`], [`trim_left`],
//!   [`trim_right`], [`trim_edge`])
//! - Full trim ([`trim_all`]), the four single-edge trims in sequence
//! - Option-driven trims ([`trim_with_options`]) selecting edges and the
//!   handling of fully transparent input
//! - One-pass bounding box ([`foreground_bounds`], [`trim_to_bounds`])
//!
//! A pixel is transparent when its alpha is 0 and opaque otherwise.
//!
//! [`PixelBuffer`]: alphatrim_core::PixelBuffer

pub mod bounds;
mod error;
pub mod options;
pub mod trim;

pub use bounds::{foreground_bounds, needs_trim, trim_to_bounds};
pub use error::{TrimError, TrimResult};
pub use options::{EdgeSet, EmptyPolicy, TrimOptions};
pub use trim::{
    trim_all, trim_bottom, trim_edge, trim_left, trim_right, trim_top, trim_with_options,
};
