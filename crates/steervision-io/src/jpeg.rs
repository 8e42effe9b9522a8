//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Grayscale (L8)
//! frames are replicated to 3 channels; RGB24 frames pass through.
//! Exotic pixel formats (CMYK, 16-bit lossless) are rejected.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use steervision_core::{Channels, Image};
use std::io::Read;

/// Read a JPEG image as RGB
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;

    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG image info".to_string()))?;
    let width = info.width as u32;
    let height = info.height as u32;

    match info.pixel_format {
        PixelFormat::RGB24 => {
            Ok(Image::from_data(width, height, Channels::Rgb, pixels)?)
        }
        PixelFormat::L8 => {
            let mut data = Vec::with_capacity(pixels.len() * 3);
            for gray in pixels {
                data.push(gray);
                data.push(gray);
                data.push(gray);
            }
            Ok(Image::from_data(width, height, Channels::Rgb, data)?)
        }
        other => Err(IoError::UnsupportedFormat(format!(
            "unsupported JPEG pixel format: {:?}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jpeg_encoder::{ColorType, Encoder};

    fn encode_jpeg(width: u16, height: u16, rgb: &[u8], quality: u8) -> Vec<u8> {
        let mut out = Vec::new();
        let encoder = Encoder::new(&mut out, quality);
        encoder
            .encode(rgb, width, height, ColorType::Rgb)
            .unwrap();
        out
    }

    #[test]
    fn test_read_rgb_roundtrip_within_tolerance() {
        // A flat mid-gray block survives JPEG at high quality nearly intact
        let rgb = vec![128u8; 16 * 16 * 3];
        let bytes = encode_jpeg(16, 16, &rgb, 100);

        let image = read_jpeg(&bytes[..]).unwrap();
        assert_eq!(image.dimensions(), (16, 16));
        assert_eq!(image.channels(), Channels::Rgb);
        for (&got, &want) in image.data().iter().zip(rgb.iter()) {
            assert!(
                (got as i16 - want as i16).abs() <= 4,
                "sample {} too far from {}",
                got,
                want
            );
        }
    }

    #[test]
    fn test_read_grayscale_replicates_channels() {
        let gray = vec![200u8; 8 * 8];
        let mut out = Vec::new();
        let encoder = Encoder::new(&mut out, 100);
        encoder
            .encode(&gray, 8, 8, ColorType::Luma)
            .unwrap();

        let image = read_jpeg(&out[..]).unwrap();
        assert_eq!(image.channels(), Channels::Rgb);
        for px in image.data().chunks(3) {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
            assert!((px[0] as i16 - 200).abs() <= 4);
        }
    }

    #[test]
    fn test_read_garbage_fails() {
        let result = read_jpeg(&[0xFF, 0xD8, 0xFF, 0x00, 0x01, 0x02][..]);
        assert!(matches!(result, Err(IoError::DecodeError(_))));
    }
}
