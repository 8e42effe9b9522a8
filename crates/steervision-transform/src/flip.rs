//! Horizontal mirror
//!
//! Flipping simulates driving the same stretch of road in the opposite
//! lane curvature: the mirrored frame pairs with a negated steering
//! label. The flip is sample-exact, so two flips restore the original
//! image bit-for-bit.

use crate::TransformResult;
use steervision_core::{FImage, Image};

/// Flip an image left-right (reverse the width axis)
pub fn flip_horizontal(image: &Image) -> TransformResult<Image> {
    let w = image.width() as usize;
    let h = image.height() as usize;
    let spp = image.channels().count();
    let src = image.data();

    let mut data = Vec::with_capacity(src.len());
    for y in 0..h {
        let row = y * w * spp;
        for x in 0..w {
            let idx = row + (w - 1 - x) * spp;
            data.extend_from_slice(&src[idx..idx + spp]);
        }
    }

    Ok(Image::from_data(
        image.width(),
        image.height(),
        image.channels(),
        data,
    )?)
}

/// Flip a floating-point image left-right
pub fn flip_horizontal_float(image: &FImage) -> TransformResult<FImage> {
    let w = image.width() as usize;
    let h = image.height() as usize;
    let spp = image.channels().count();
    let src = image.data();

    let mut data = Vec::with_capacity(src.len());
    for y in 0..h {
        let row = y * w * spp;
        for x in 0..w {
            let idx = row + (w - 1 - x) * spp;
            data.extend_from_slice(&src[idx..idx + spp]);
        }
    }

    Ok(FImage::from_data(
        image.width(),
        image.height(),
        image.channels(),
        data,
    )?)
}
