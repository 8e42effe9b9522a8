//! steervision-io - Image loading for steervision
//!
//! Loads camera frames from disk as 3-channel RGB [`Image`]s. The format
//! is sniffed from magic bytes, never from the file extension. Format
//! support is feature-gated:
//!
//! - `bmp` - uncompressed Windows bitmaps
//! - `png-format` - PNG via the `png` crate
//! - `jpeg` - JPEG via the `jpeg-decoder` crate
//!
//! All three are enabled by default.
//!
//! # Example
//!
//! ```no_run
//! use steervision_io::load;
//!
//! let frame = load("center_2016_12_01_13_30_48_287.jpg").unwrap();
//! assert_eq!(frame.channels(), steervision_core::Channels::Rgb);
//! ```

#[cfg(feature = "bmp")]
pub mod bmp;
mod error;
mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use std::path::Path;
use steervision_core::Image;

/// Load an image file as RGB
///
/// Reads the file, detects its format from the leading magic bytes and
/// dispatches to the matching decoder. The result is always a 3-channel
/// RGB image regardless of the source's native layout.
///
/// # Errors
///
/// - `IoError::Io` if the file cannot be read
/// - `IoError::UnsupportedFormat` if the format is unknown or its
///   feature is disabled
/// - `IoError::DecodeError` / `IoError::InvalidData` if the contents
///   are not a decodable image
pub fn load<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let data = std::fs::read(path)?;
    let format = detect_format_from_bytes(&data)?;

    match format {
        #[cfg(feature = "bmp")]
        ImageFormat::Bmp => bmp::read_bmp(&data[..]),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(&data[..]),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(&data[..]),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}
