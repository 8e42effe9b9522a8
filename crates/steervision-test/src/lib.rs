//! steervision-test - Regression test helpers for steervision
//!
//! Provides the [`RegParams`] comparison tracker used by the `*_reg.rs`
//! integration tests, plus synthetic image builders so tests never
//! depend on fixture files on disk.
//!
//! # Usage
//!
//! ```
//! use steervision_test::{RegParams, gradient_image};
//!
//! let mut rp = RegParams::new("example");
//! let image = gradient_image(8, 8);
//! rp.compare_values(8.0, image.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use steervision_core::{Channels, Image, Plane};

/// Build an RGB test image with red ramping along x, green along y,
/// and blue constant at 128
pub fn gradient_image(width: u32, height: u32) -> Image {
    let mut data = Vec::with_capacity((width as usize) * (height as usize) * 3);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width) as u8;
            let g = (y * 255 / height) as u8;
            data.push(r);
            data.push(g);
            data.push(128);
        }
    }
    Image::from_data(width, height, Channels::Rgb, data).expect("builder dimensions are valid")
}

/// Build a constant-valued RGB test image
pub fn constant_image(width: u32, height: u32, value: u8) -> Image {
    let size = (width as usize) * (height as usize) * 3;
    Image::from_data(width, height, Channels::Rgb, vec![value; size])
        .expect("builder dimensions are valid")
}

/// Build a grayscale plane ramping linearly over `[0, 1]` in scan order
pub fn gray_ramp_plane(width: u32, height: u32) -> Plane {
    let total = (width as usize) * (height as usize);
    let data: Vec<f32> = (0..total)
        .map(|i| i as f32 / (total - 1).max(1) as f32)
        .collect();
    Plane::from_data(width, height, data).expect("builder dimensions are valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_image_shape() {
        let image = gradient_image(10, 5);
        assert_eq!(image.dimensions(), (10, 5));
        assert_eq!(image.channels(), Channels::Rgb);
        // blue channel is constant
        assert_eq!(image.get(0, 0, 2).unwrap(), 128);
        assert_eq!(image.get(9, 4, 2).unwrap(), 128);
    }

    #[test]
    fn test_constant_image_values() {
        let image = constant_image(4, 4, 9);
        assert!(image.data().iter().all(|&v| v == 9));
    }

    #[test]
    fn test_gray_ramp_plane_range() {
        let plane = gray_ramp_plane(8, 4);
        assert_eq!(plane.get(0, 0).unwrap(), 0.0);
        assert_eq!(plane.get(7, 3).unwrap(), 1.0);
    }
}
