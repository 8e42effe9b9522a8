//! Grayscale channel-axis utilities
//!
//! Neural-network input layers expect grayscale frames with an explicit
//! trailing channel axis (H×W×1); display and classical processing code
//! works on the bare H×W plane. These functions convert between the two
//! without touching sample values.

use crate::error::{Error, Result};
use crate::fimage::FImage;
use crate::image::Channels;
use crate::plane::Plane;

/// Append a trailing size-1 channel axis to a grayscale plane
///
/// Sample values are untouched; only the shape changes from H×W to H×W×1.
///
/// # Examples
///
/// ```
/// use steervision_core::{Channels, Plane, add_gray_dimension};
///
/// let plane = Plane::new(64, 32).unwrap();
/// let image = add_gray_dimension(&plane);
/// assert_eq!(image.dimensions(), (64, 32));
/// assert_eq!(image.channels(), Channels::Gray);
/// ```
pub fn add_gray_dimension(plane: &Plane) -> FImage {
    FImage::from_data(
        plane.width(),
        plane.height(),
        Channels::Gray,
        plane.data().to_vec(),
    )
    .expect("plane dimensions are valid")
}

/// Remove the trailing size-1 channel axis from a grayscale image
///
/// The inverse of [`add_gray_dimension`]:
/// `drop_gray_dimension(&add_gray_dimension(&p))` returns a plane equal
/// to `p` for every `p`.
///
/// # Errors
///
/// Returns `Error::NotSingleChannel` if the image has more than one
/// channel.
pub fn drop_gray_dimension(image: &FImage) -> Result<Plane> {
    if image.channels() != Channels::Gray {
        return Err(Error::NotSingleChannel(image.channels().count()));
    }
    Plane::from_data(image.width(), image.height(), image.data().to_vec())
}
