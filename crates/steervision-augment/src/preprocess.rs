//! Model-input preprocessing
//!
//! The fixed pipeline that turns a camera frame into the network's
//! input tensor:
//!
//! 1. Resize to 64x160 (width x height)
//! 2. Crop rows [73, 137) — drops sky above and hood below, keeping the
//!    64-row road band
//! 3. Cast to f32
//! 4. Min-max normalize over the whole crop into [-0.5, 0.5]
//!
//! The normalization divides by `max - min`; a constant-valued frame
//! therefore produces NaN samples. That degenerate case is left
//! unguarded and propagates to the caller.

use crate::AugmentResult;
use steervision_core::{FImage, Image};
use steervision_transform::{resize, resize_float};

/// Width of the resized model input
pub const MODEL_INPUT_WIDTH: u32 = 64;

/// Height of the resized frame before cropping
pub const MODEL_INPUT_HEIGHT: u32 = 160;

/// Rows dropped from the top of the resized frame (sky)
pub const CROP_TOP: u32 = 73;

/// Rows dropped from the bottom of the resized frame (hood)
pub const CROP_BOTTOM: u32 = 23;

/// Preprocess an 8-bit camera frame into a normalized model input
///
/// Output shape is 64 columns by `160 - 73 - 23 = 64` rows with the
/// source's channel count, values in [-0.5, 0.5].
pub fn preprocess(image: &Image) -> AugmentResult<FImage> {
    let resized = resize(image, MODEL_INPUT_WIDTH, MODEL_INPUT_HEIGHT)?;
    let band_height = resized.height() - CROP_TOP - CROP_BOTTOM;
    let cropped = resized.crop(0, CROP_TOP, resized.width(), band_height)?;
    Ok(normalize(&cropped.to_float()))
}

/// Preprocess a frame already in floating point (e.g. a warped frame)
pub fn preprocess_float(image: &FImage) -> AugmentResult<FImage> {
    let resized = resize_float(image, MODEL_INPUT_WIDTH, MODEL_INPUT_HEIGHT)?;
    let band_height = resized.height() - CROP_TOP - CROP_BOTTOM;
    let cropped = resized.crop(0, CROP_TOP, resized.width(), band_height)?;
    Ok(normalize(&cropped))
}

/// Min-max normalize every sample into [-0.5, 0.5]
///
/// `(v - min) / (max - min) - 0.5` with the min and max taken globally
/// over all pixels and channels. Constant input yields NaN.
pub fn normalize(image: &FImage) -> FImage {
    let min = image.min();
    let range = image.max() - min;
    let data = image
        .data()
        .iter()
        .map(|&v| (v - min) / range - 0.5)
        .collect();
    FImage::from_data(image.width(), image.height(), image.channels(), data)
        .expect("source image dimensions are valid")
}
