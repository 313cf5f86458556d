//! alphatrim-io - Image I/O for alphatrim
//!
//! Decodes image files into [`PixelBuffer`]s and encodes them back. The
//! trimming crates never touch files; this crate is the collaborator that
//! hands them a buffer and takes the result away.
//!
//! # Supported formats
//!
//! | Format | Read | Write | Feature |
//! |--------|------|-------|---------|
//! | PNG    | yes  | yes   | `png-format` (default) |

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use alphatrim_core::PixelBuffer;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file, detecting the format from its header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let file = File::open(path)?;
    read_image_format(BufReader::new(file), format)
}

/// Read an image from memory, detecting the format from its header.
pub fn read_image_mem(data: &[u8]) -> IoResult<PixelBuffer> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

#[cfg_attr(not(feature = "png-format"), allow(unused_variables))]
fn read_image_format<R: std::io::BufRead + std::io::Seek>(
    reader: R,
    format: ImageFormat,
) -> IoResult<PixelBuffer> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        other => Err(IoError::UnsupportedFormat(format!(
            "cannot decode {:?}",
            other
        ))),
    }
}

/// Write an image to a file.
///
/// [`ImageFormat::Unknown`] picks the format from the path's extension.
pub fn write_image<P: AsRef<Path>>(buf: &PixelBuffer, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let format = match format {
        ImageFormat::Unknown => ImageFormat::from_path(path),
        f => f,
    };
    let mut writer = BufWriter::new(File::create(path)?);
    write_image_format(buf, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into memory.
pub fn write_image_mem(buf: &PixelBuffer, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    write_image_format(buf, &mut out, format)?;
    Ok(out)
}

#[cfg_attr(not(feature = "png-format"), allow(unused_variables))]
fn write_image_format<W: Write>(buf: &PixelBuffer, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(buf, writer),
        other => Err(IoError::UnsupportedFormat(format!(
            "cannot encode {:?}",
            other
        ))),
    }
}
