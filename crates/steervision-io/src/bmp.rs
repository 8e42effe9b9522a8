//! BMP image format support
//!
//! Reads uncompressed Windows Bitmap (BMP) files: 1/4/8-bit paletted,
//! 24-bit BGR and 32-bit BGRA, bottom-up or top-down row order. All
//! variants decode to a 3-channel RGB [`Image`].

use crate::{IoError, IoResult};
use steervision_core::{Channels, Image};
use std::io::Read;

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

/// Read a BMP image as RGB
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<Image> {
    // Read file header (14 bytes)
    let mut file_header = [0u8; BMP_FILE_HEADER_SIZE];
    reader.read_exact(&mut file_header).map_err(IoError::Io)?;

    // Verify magic number
    if &file_header[0..2] != b"BM" {
        return Err(IoError::InvalidData("not a BMP file".to_string()));
    }

    // Get pixel data offset
    let pixel_offset = u32::from_le_bytes([
        file_header[10],
        file_header[11],
        file_header[12],
        file_header[13],
    ]) as usize;

    // Read info header (minimum 40 bytes)
    let mut info_header = [0u8; 40];
    reader.read_exact(&mut info_header).map_err(IoError::Io)?;

    let header_size = u32::from_le_bytes([
        info_header[0],
        info_header[1],
        info_header[2],
        info_header[3],
    ]);

    if header_size < BMP_INFO_HEADER_SIZE {
        return Err(IoError::InvalidData(format!(
            "unsupported BMP header size: {}",
            header_size
        )));
    }

    let width = i32::from_le_bytes([
        info_header[4],
        info_header[5],
        info_header[6],
        info_header[7],
    ]);

    let height = i32::from_le_bytes([
        info_header[8],
        info_header[9],
        info_header[10],
        info_header[11],
    ]);

    let planes = u16::from_le_bytes([info_header[12], info_header[13]]);
    if planes != 1 {
        return Err(IoError::InvalidData(format!(
            "unsupported number of planes: {}",
            planes
        )));
    }

    let bits_per_pixel = u16::from_le_bytes([info_header[14], info_header[15]]);

    let compression = u32::from_le_bytes([
        info_header[16],
        info_header[17],
        info_header[18],
        info_header[19],
    ]);

    // Only uncompressed BMP (BI_RGB and BI_BITFIELDS with default masks)
    if compression != 0 && compression != 3 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP compression: {}",
            compression
        )));
    }

    let width = width.unsigned_abs();
    let top_down = height < 0;
    let height = height.unsigned_abs();

    if !matches!(bits_per_pixel, 1 | 4 | 8 | 24 | 32) {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP bit depth: {}",
            bits_per_pixel
        )));
    }

    // Read palette if present (for 1, 4, 8 bit images), stored as BGRA
    let palette = if bits_per_pixel <= 8 {
        let num_colors = 1usize << bits_per_pixel;
        let bytes_to_skip = header_size as usize - 40;
        if bytes_to_skip > 0 {
            let mut skip = vec![0u8; bytes_to_skip];
            reader.read_exact(&mut skip).map_err(IoError::Io)?;
        }

        let mut colors = vec![0u8; num_colors * 4];
        reader.read_exact(&mut colors).map_err(IoError::Io)?;
        Some(colors)
    } else {
        None
    };

    // Skip to pixel data
    let current_pos = BMP_FILE_HEADER_SIZE
        + header_size as usize
        + palette.as_ref().map_or(0, |p| p.len());
    if pixel_offset > current_pos {
        let skip_bytes = pixel_offset - current_pos;
        let mut skip = vec![0u8; skip_bytes];
        reader.read_exact(&mut skip).map_err(IoError::Io)?;
    }

    let mut image = Image::new(width, height, Channels::Rgb)?;

    // BMP rows are 4-byte aligned
    let row_stride = ((width as usize * bits_per_pixel as usize + 31) / 32) * 4;
    let mut row_buffer = vec![0u8; row_stride];

    for row in 0..height {
        reader.read_exact(&mut row_buffer).map_err(IoError::Io)?;

        let y = if top_down { row } else { height - 1 - row };

        match bits_per_pixel {
            1 | 4 | 8 => {
                let palette = palette.as_ref().expect("palette read for <=8bpp");
                for x in 0..width {
                    let index = match bits_per_pixel {
                        1 => {
                            let byte_idx = (x / 8) as usize;
                            let bit_idx = 7 - (x % 8);
                            ((row_buffer[byte_idx] >> bit_idx) & 1) as usize
                        }
                        4 => {
                            let byte_idx = (x / 2) as usize;
                            if x % 2 == 0 {
                                ((row_buffer[byte_idx] >> 4) & 0xF) as usize
                            } else {
                                (row_buffer[byte_idx] & 0xF) as usize
                            }
                        }
                        _ => row_buffer[x as usize] as usize,
                    };

                    // Palette entries are b, g, r, reserved
                    let b = palette[index * 4];
                    let g = palette[index * 4 + 1];
                    let r = palette[index * 4 + 2];
                    set_rgb(&mut image, x, y, r, g, b)?;
                }
            }
            24 => {
                for x in 0..width {
                    let idx = (x as usize) * 3;
                    let b = row_buffer[idx];
                    let g = row_buffer[idx + 1];
                    let r = row_buffer[idx + 2];
                    set_rgb(&mut image, x, y, r, g, b)?;
                }
            }
            32 => {
                for x in 0..width {
                    let idx = (x as usize) * 4;
                    let b = row_buffer[idx];
                    let g = row_buffer[idx + 1];
                    let r = row_buffer[idx + 2];
                    set_rgb(&mut image, x, y, r, g, b)?;
                }
            }
            _ => unreachable!(),
        }
    }

    Ok(image)
}

#[inline]
fn set_rgb(image: &mut Image, x: u32, y: u32, r: u8, g: u8, b: u8) -> IoResult<()> {
    image.set(x, y, 0, r)?;
    image.set(x, y, 1, g)?;
    image.set(x, y, 2, b)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a minimal 24-bit bottom-up BMP from RGB pixel rows
    /// (top row first)
    pub(crate) fn build_bmp_24(width: u32, height: u32, rgb_rows: &[&[(u8, u8, u8)]]) -> Vec<u8> {
        let row_stride = ((width as usize * 24 + 31) / 32) * 4;
        let data_size = row_stride * height as usize;
        let file_size = 54 + data_size;

        let mut out = Vec::with_capacity(file_size);
        // File header
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&(file_size as u32).to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&54u32.to_le_bytes());
        // Info header
        out.extend_from_slice(&40u32.to_le_bytes());
        out.extend_from_slice(&(width as i32).to_le_bytes());
        out.extend_from_slice(&(height as i32).to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&24u16.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&(data_size as u32).to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        // Pixel rows, bottom-up, BGR, padded
        for row in rgb_rows.iter().rev() {
            let mut written = 0;
            for &(r, g, b) in row.iter() {
                out.push(b);
                out.push(g);
                out.push(r);
                written += 3;
            }
            while written % 4 != 0 {
                out.push(0);
                written += 1;
            }
        }
        out
    }

    #[test]
    fn test_read_24bit_bottom_up() {
        let top: &[(u8, u8, u8)] = &[(255, 0, 0), (0, 255, 0)];
        let bottom: &[(u8, u8, u8)] = &[(0, 0, 255), (10, 20, 30)];
        let bytes = build_bmp_24(2, 2, &[top, bottom]);

        let image = read_bmp(&bytes[..]).unwrap();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.channels(), Channels::Rgb);

        // Row order restored to top-down RGB
        assert_eq!(image.row(0).unwrap(), &[255, 0, 0, 0, 255, 0]);
        assert_eq!(image.row(1).unwrap(), &[0, 0, 255, 10, 20, 30]);
    }

    #[test]
    fn test_read_rejects_bad_magic() {
        let mut bytes = build_bmp_24(1, 1, &[&[(1, 2, 3)]]);
        bytes[0] = b'X';
        assert!(matches!(
            read_bmp(&bytes[..]),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_read_truncated_fails() {
        let bytes = build_bmp_24(2, 2, &[
            &[(255, 0, 0), (0, 255, 0)],
            &[(0, 0, 255), (10, 20, 30)],
        ]);
        assert!(matches!(
            read_bmp(&bytes[..bytes.len() - 4]),
            Err(IoError::Io(_))
        ));
    }

    #[test]
    fn test_read_rejects_compressed() {
        let mut bytes = build_bmp_24(1, 1, &[&[(1, 2, 3)]]);
        // Compression field lives at offset 14 + 16
        bytes[30] = 1;
        assert!(matches!(
            read_bmp(&bytes[..]),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
