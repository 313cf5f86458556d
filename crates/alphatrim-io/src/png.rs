//! PNG image format support
//!
//! Every PNG is decoded into 8-bit RGBA:
//!
//! - palettes and low bit depths are expanded, and a `tRNS` chunk becomes
//!   real alpha
//! - 16-bit samples keep their high byte
//! - gray is replicated into R, G and B
//! - images without alpha get alpha 255
//!
//! Writing always produces an 8-bit RGBA PNG.

use crate::{IoError, IoResult};
use alphatrim_core::{CHANNELS, PixelBuffer};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;

    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth: {:?}",
            output_info.bit_depth
        )));
    }

    let samples = match output_info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpected PNG output color type: {:?}",
                other
            )));
        }
    };

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let mut rgba = Vec::with_capacity(width as usize * height as usize * CHANNELS);

    for row in 0..height as usize {
        let line = &data[row * bytes_per_row..row * bytes_per_row + width as usize * samples];
        for px in line.chunks_exact(samples) {
            let pixel = match samples {
                1 => [px[0], px[0], px[0], 255],
                2 => [px[0], px[0], px[0], px[1]],
                3 => [px[0], px[1], px[2], 255],
                _ => [px[0], px[1], px[2], px[3]],
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    Ok(PixelBuffer::from_raw(width, height, rgba)?)
}

/// Write a PNG image
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] for a buffer with zero width or height,
/// which PNG cannot represent.
pub fn write_png<W: Write>(buf: &PixelBuffer, writer: W) -> IoResult<()> {
    if buf.is_empty() {
        return Err(IoError::InvalidData(format!(
            "cannot encode a {}x{} image",
            buf.width(),
            buf.height()
        )));
    }

    let mut encoder = Encoder::new(writer, buf.width(), buf.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(buf.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
