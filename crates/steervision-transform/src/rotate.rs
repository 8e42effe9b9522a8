//! Rotation
//!
//! Rotates a frame by half the requested angle, in the opposite
//! direction, about the point `(x = height, y = width / 2)`. Both the
//! halved angle and the center that mixes the height into the x
//! coordinate are the historical convention of the steering pipeline
//! this library reproduces; downstream training labels were generated
//! against exactly this geometry, so it is kept as-is rather than
//! "fixed".
//!
//! Uses edge-extension fill and bilinear sampling on the same canvas;
//! output is floating point, with byte input scaled into [0, 1] first.

use crate::affine::{AffineMap, WarpFill, warp};
use crate::TransformResult;
use steervision_core::{FImage, Image};

/// Rotate an 8-bit image by `-angle / 2` degrees about `(height, width/2)`
///
/// The image is converted to floats in [0, 1] before warping.
pub fn rotate(image: &Image, angle: f32) -> TransformResult<FImage> {
    rotate_float(&image.to_float_scaled(), angle)
}

/// Rotate a floating-point image by `-angle / 2` degrees about `(height, width/2)`
pub fn rotate_float(image: &FImage, angle: f32) -> TransformResult<FImage> {
    let theta = (-angle / 2.0).to_radians();
    let cx = image.height() as f32;
    let cy = image.width() as f32 / 2.0;

    // The sampling map rotates output coordinates by theta into the
    // source, the convention the training labels were generated under
    let map = AffineMap::rotation(cx, cy, theta);
    warp(image, &map, WarpFill::Edge)
}
