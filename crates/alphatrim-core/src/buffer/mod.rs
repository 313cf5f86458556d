//! PixelBuffer - The RGBA image container
//!
//! `PixelBuffer` is the only image type the trimming code works with.
//!
//! # Pixel layout
//!
//! - Samples are stored as one flat `Vec<u8>`, row-major
//! - Every pixel occupies 4 consecutive samples in `[R, G, B, A]` order
//! - Pixel `(row, col)` starts at sample `(row * width + col) * 4`
//! - There is no row padding, so `data().len() == width * height * 4`
//!
//! A pixel with `alpha == 0` is transparent; any other alpha value is
//! opaque. There is no threshold in between.
//!
//! # Ownership model
//!
//! `PixelBuffer` uses `Arc` for cheap cloning (shared ownership) and is
//! never modified in place. To build or edit pixel data, convert to
//! `PixelBufferMut` via [`PixelBuffer::try_into_mut`] or
//! [`PixelBuffer::to_mut`], then convert back with `Into<PixelBuffer>`.

mod access;
mod clip;
pub mod compare;
mod scan;

pub use compare::BufferDiff;
pub use scan::{Edge, Position};

use crate::error::{Error, Result};
use std::sync::Arc;

/// Number of samples per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Number of samples a `width` x `height` RGBA buffer holds, or `None`
/// if the count does not fit in `usize`.
pub(crate) fn sample_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}

/// One RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red sample
    pub r: u8,
    /// Green sample
    pub g: u8,
    /// Blue sample
    pub b: u8,
    /// Alpha sample; 0 means transparent
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the value of every sample in a new buffer.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Create a pixel from its four samples.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a pixel with alpha = 255.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// `true` if alpha is non-zero.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a != 0
    }

    /// `true` if alpha is zero.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// The pixel as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(s: [u8; 4]) -> Self {
        Rgba::new(s[0], s[1], s[2], s[3])
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(p: Rgba) -> Self {
        p.to_array()
    }
}

/// Internal buffer data
#[derive(Debug, Clone, PartialEq, Eq)]
struct BufferData {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// Immutable RGBA pixel buffer
///
/// Two buffers are equal when their width, height and samples are equal.
///
/// # Examples
///
/// ```
/// use alphatrim_core::{PixelBuffer, Rgba};
///
/// let buf = PixelBuffer::filled(4, 3, Rgba::opaque(10, 20, 30)).unwrap();
/// assert_eq!(buf.width(), 4);
/// assert_eq!(buf.height(), 3);
/// assert_eq!(buf.data().len(), 4 * 3 * 4);
/// ```
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    inner: Arc<BufferData>,
}

impl PartialEq for PixelBuffer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner == other.inner
    }
}

impl Eq for PixelBuffer {}

impl PixelBuffer {
    /// Create a fully transparent buffer.
    ///
    /// Zero width or height is allowed and yields a degenerate buffer with
    /// no samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBuffer`] if `width * height * 4` overflows.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = sample_len(width, height).ok_or(Error::InvalidBuffer {
            width,
            height,
            len: 0,
        })?;
        Ok(Self::from_parts(width, height, vec![0u8; len]))
    }

    /// Create a buffer where every pixel is `color`.
    ///
    /// # Errors
    ///
    /// Same as [`PixelBuffer::new`].
    pub fn filled(width: u32, height: u32, color: Rgba) -> Result<Self> {
        let mut buf = Self::new(width, height)?.to_mut();
        buf.fill(color);
        Ok(buf.into())
    }

    /// Wrap an existing sample sequence.
    ///
    /// This is the gate for data produced outside the crate (decoders,
    /// raw frame grabs): the length is checked once here, so every
    /// `PixelBuffer` in circulation is well-formed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBuffer`] if `data.len() != width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        match sample_len(width, height) {
            Some(len) if len == data.len() => Ok(Self::from_parts(width, height, data)),
            _ => Err(Error::InvalidBuffer {
                width,
                height,
                len: data.len(),
            }),
        }
    }

    #[inline]
    fn from_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        PixelBuffer {
            inner: Arc::new(BufferData {
                width,
                height,
                data,
            }),
        }
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.data.len() / CHANNELS
    }

    /// `true` if width or height is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.width == 0 || self.inner.height == 0
    }

    /// All samples, row-major, 4 per pixel.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Samples of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row_data(&self, row: u32) -> &[u8] {
        let stride = self.inner.width as usize * CHANNELS;
        let start = row as usize * stride;
        &self.inner.data[start..start + stride]
    }

    /// `true` if both buffers have the same width and height.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Take the samples out, copying only if the storage is shared.
    pub fn into_raw(self) -> Vec<u8> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => data.data,
            Err(arc) => arc.data.clone(),
        }
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixelBufferMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixelBufferMut { inner: data }),
            Err(arc) => Err(PixelBuffer { inner: arc }),
        }
    }

    /// Create a mutable copy of this buffer.
    pub fn to_mut(&self) -> PixelBufferMut {
        PixelBufferMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable pixel buffer
///
/// Used by producers (decoders, fixtures) to fill in pixel data. Convert
/// back to an immutable [`PixelBuffer`] using `Into<PixelBuffer>`.
#[derive(Debug)]
pub struct PixelBufferMut {
    inner: BufferData,
}

impl PixelBufferMut {
    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// All samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// All samples, mutable.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Samples of one row, mutable.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, row: u32) -> &mut [u8] {
        let stride = self.inner.width as usize * CHANNELS;
        let start = row as usize * stride;
        &mut self.inner.data[start..start + stride]
    }
}

impl From<PixelBufferMut> for PixelBuffer {
    fn from(buf: PixelBufferMut) -> Self {
        PixelBuffer {
            inner: Arc::new(buf.inner),
        }
    }
}
