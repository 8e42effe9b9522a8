//! Horizontal shear
//!
//! Shearing a road frame approximates a small change of heading: rows
//! near the top of the frame (far away) shift sideways more than rows
//! near the bottom (the hood). The transform keeps the line `y = height`
//! fixed and shifts row `y` by `sin(a) * (height - y)` pixels, where `a`
//! is the shear angle in radians:
//!
//! ```text
//! | 1  sin(a)  -height*sin(a) |
//! | 0  1        0             |
//! ```
//!
//! applied as the inverse sampling map with edge-extension fill, so no
//! border color is introduced. Output is floating point on the same
//! canvas; byte input is scaled into [0, 1] first.

use crate::affine::{AffineMap, WarpFill, warp};
use crate::TransformResult;
use steervision_core::{FImage, Image};

/// Shear an 8-bit image horizontally by `angle` degrees
///
/// The image is converted to floats in [0, 1] before warping.
pub fn shear(image: &Image, angle: f32) -> TransformResult<FImage> {
    shear_float(&image.to_float_scaled(), angle)
}

/// Shear a floating-point image horizontally by `angle` degrees
pub fn shear_float(image: &FImage, angle: f32) -> TransformResult<FImage> {
    let radang = angle / 180.0 * std::f32::consts::PI;
    let map = AffineMap::shear_x(radang, image.height() as f32);
    warp(image, &map, WarpFill::Edge)
}
