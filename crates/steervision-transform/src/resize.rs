//! Bilinear resize
//!
//! Resamples an image to an arbitrary target size with bilinear
//! interpolation, using half-pixel-center coordinate mapping:
//! `src = (dst + 0.5) * scale - 0.5`, clamped to the source canvas.
//! Byte output rounds to nearest.

use crate::{TransformError, TransformResult};
use steervision_core::{FImage, Image};

/// Resize an 8-bit image to `width` x `height`
///
/// # Errors
///
/// Returns `TransformError::InvalidParameters` if either target
/// dimension is zero.
pub fn resize(image: &Image, width: u32, height: u32) -> TransformResult<Image> {
    check_target(width, height)?;

    let spp = image.channels().count();
    let mut data = vec![0u8; (width as usize) * (height as usize) * spp];

    resample(
        image.data(),
        image.width(),
        image.height(),
        spp,
        width,
        height,
        |acc| acc.round() as u8,
        &mut data,
    );

    Ok(Image::from_data(width, height, image.channels(), data)?)
}

/// Resize a floating-point image to `width` x `height`
///
/// # Errors
///
/// Returns `TransformError::InvalidParameters` if either target
/// dimension is zero.
pub fn resize_float(image: &FImage, width: u32, height: u32) -> TransformResult<FImage> {
    check_target(width, height)?;

    let spp = image.channels().count();
    let mut data = vec![0.0f32; (width as usize) * (height as usize) * spp];

    resample(
        image.data(),
        image.width(),
        image.height(),
        spp,
        width,
        height,
        |acc| acc,
        &mut data,
    );

    Ok(FImage::from_data(width, height, image.channels(), data)?)
}

fn check_target(width: u32, height: u32) -> TransformResult<()> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "target size must be positive, got {}x{}",
            width, height
        )));
    }
    Ok(())
}

/// Bilinear resampling over interleaved sample buffers
#[allow(clippy::too_many_arguments)]
fn resample<T, U, F>(
    src: &[T],
    src_w: u32,
    src_h: u32,
    spp: usize,
    dst_w: u32,
    dst_h: u32,
    quantize: F,
    dst: &mut [U],
) where
    T: Copy + Into<f32>,
    F: Fn(f32) -> U,
{
    let scale_x = src_w as f32 / dst_w as f32;
    let scale_y = src_h as f32 / dst_h as f32;
    let max_x = (src_w - 1) as f32;
    let max_y = (src_h - 1) as f32;

    for dy in 0..dst_h {
        let sy = ((dy as f32 + 0.5) * scale_y - 0.5).clamp(0.0, max_y);
        let y0 = sy.floor() as u32;
        let y1 = (y0 + 1).min(src_h - 1);
        let fy = sy - y0 as f32;

        for dx in 0..dst_w {
            let sx = ((dx as f32 + 0.5) * scale_x - 0.5).clamp(0.0, max_x);
            let x0 = sx.floor() as u32;
            let x1 = (x0 + 1).min(src_w - 1);
            let fx = sx - x0 as f32;

            let row0 = (y0 as usize) * (src_w as usize);
            let row1 = (y1 as usize) * (src_w as usize);
            let i00 = (row0 + x0 as usize) * spp;
            let i10 = (row0 + x1 as usize) * spp;
            let i01 = (row1 + x0 as usize) * spp;
            let i11 = (row1 + x1 as usize) * spp;
            let out_idx = ((dy as usize) * (dst_w as usize) + (dx as usize)) * spp;

            for c in 0..spp {
                let v00: f32 = src[i00 + c].into();
                let v10: f32 = src[i10 + c].into();
                let v01: f32 = src[i01 + c].into();
                let v11: f32 = src[i11 + c].into();
                let top = v00 + fx * (v10 - v00);
                let bottom = v01 + fx * (v11 - v01);
                dst[out_idx + c] = quantize(top + fy * (bottom - top));
            }
        }
    }
}
