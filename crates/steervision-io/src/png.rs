//! PNG image format support
//!
//! Decodes grayscale (1/2/4/8/16-bit), grayscale+alpha, RGB(A) and
//! indexed PNGs to a 3-channel RGB [`Image`]. Grayscale values are
//! replicated across the channels, alpha is discarded, palette indices
//! are resolved through the palette.

use crate::{IoError, IoResult};
use ::png::{BitDepth, ColorType, Decoder};
use steervision_core::{Channels, Image};
use std::io::{Cursor, Read};

/// Read a PNG image as RGB
pub fn read_png<R: Read>(mut reader: R) -> IoResult<Image> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(IoError::Io)?;
    let decoder = Decoder::new(Cursor::new(bytes));
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    match (color_type, bit_depth) {
        (ColorType::Grayscale | ColorType::Indexed, _)
        | (ColorType::GrayscaleAlpha | ColorType::Rgb | ColorType::Rgba, BitDepth::Eight)
        | (ColorType::GrayscaleAlpha | ColorType::Rgb | ColorType::Rgba, BitDepth::Sixteen) => {}
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    }

    // Read image data
    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let palette = reader.info().palette.as_ref().map(|p| p.to_vec());
    if color_type == ColorType::Indexed && palette.is_none() {
        return Err(IoError::InvalidData(
            "indexed PNG without palette".to_string(),
        ));
    }

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut image = Image::new(width, height, Channels::Rgb)?;

    match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::One)
        | (ColorType::Grayscale, BitDepth::Two)
        | (ColorType::Grayscale, BitDepth::Four) => {
            let bits = bit_depth as usize;
            let max = (1u16 << bits) - 1;
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let val = unpack_sub_byte(data, row_start, x, bits);
                    let gray = (val as u16 * 255 / max) as u8;
                    set_rgb(&mut image, x, y, gray, gray, gray)?;
                }
            }
        }
        (ColorType::Indexed, _) => {
            let palette = palette.expect("checked above");
            let bits = bit_depth as usize;
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let index = if bits == 8 {
                        data[row_start + x as usize] as usize
                    } else {
                        unpack_sub_byte(data, row_start, x, bits) as usize
                    };
                    let (r, g, b) = if index * 3 + 2 < palette.len() {
                        (
                            palette[index * 3],
                            palette[index * 3 + 1],
                            palette[index * 3 + 2],
                        )
                    } else {
                        (0, 0, 0)
                    };
                    set_rgb(&mut image, x, y, r, g, b)?;
                }
            }
        }
        (ColorType::Grayscale, BitDepth::Eight) => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let gray = data[row_start + x as usize];
                    set_rgb(&mut image, x, y, gray, gray, gray)?;
                }
            }
        }
        (ColorType::Grayscale, BitDepth::Sixteen) => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    // Big-endian 16-bit sample; keep the high byte
                    let gray = data[row_start + (x as usize) * 2];
                    set_rgb(&mut image, x, y, gray, gray, gray)?;
                }
            }
        }
        (ColorType::GrayscaleAlpha, _) => {
            let samples = if bit_depth == BitDepth::Sixteen { 4 } else { 2 };
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let gray = data[row_start + (x as usize) * samples];
                    set_rgb(&mut image, x, y, gray, gray, gray)?;
                }
            }
        }
        (ColorType::Rgb, _) => {
            let samples = if bit_depth == BitDepth::Sixteen { 6 } else { 3 };
            let step = samples / 3;
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + (x as usize) * samples;
                    set_rgb(
                        &mut image,
                        x,
                        y,
                        data[idx],
                        data[idx + step],
                        data[idx + 2 * step],
                    )?;
                }
            }
        }
        (ColorType::Rgba, _) => {
            let samples = if bit_depth == BitDepth::Sixteen { 8 } else { 4 };
            let step = samples / 4;
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + (x as usize) * samples;
                    set_rgb(
                        &mut image,
                        x,
                        y,
                        data[idx],
                        data[idx + step],
                        data[idx + 2 * step],
                    )?;
                }
            }
        }
        _ => unreachable!(),
    }

    Ok(image)
}

/// Unpack a 1/2/4-bit sample from a packed row
#[inline]
fn unpack_sub_byte(data: &[u8], row_start: usize, x: u32, bits: usize) -> u8 {
    let per_byte = 8 / bits;
    let byte_idx = row_start + (x as usize) / per_byte;
    let shift = 8 - bits - ((x as usize) % per_byte) * bits;
    (data[byte_idx] >> shift) & ((1 << bits) - 1) as u8
}

#[inline]
fn set_rgb(image: &mut Image, x: u32, y: u32, r: u8, g: u8, b: u8) -> IoResult<()> {
    image.set(x, y, 0, r)?;
    image.set(x, y, 1, g)?;
    image.set(x, y, 2, b)?;
    Ok(())
}
