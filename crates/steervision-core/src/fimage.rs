//! Floating-point image container
//!
//! `FImage` mirrors [`Image`](crate::Image) with `f32` samples. It is the
//! working type of everything downstream of the decoder: warped frames,
//! normalized model inputs, intermediate pixel math.
//!
//! # Examples
//!
//! ```
//! use steervision_core::{Channels, FImage};
//!
//! let mut fimage = FImage::new(100, 100, Channels::Gray).unwrap();
//! fimage.set(10, 20, 0, 0.5).unwrap();
//! assert_eq!(fimage.get(10, 20, 0).unwrap(), 0.5);
//! assert_eq!(fimage.max(), 0.5);
//! ```

use crate::error::{Error, Result};
use crate::image::{Channels, check_crop_rect};

/// Floating-point image with interleaved channels
///
/// # Memory Layout
///
/// Same as [`Image`](crate::Image): the sample for channel `c` of the
/// pixel at (x, y) is at index `(y * width + x) * channels + c`.
#[derive(Debug, Clone, PartialEq)]
pub struct FImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Channel layout
    channels: Channels,
    /// Sample data (row-major, interleaved, no padding)
    data: Vec<f32>,
}

impl FImage {
    /// Create a new image with all samples set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize) * channels.count();
        Ok(FImage {
            width,
            height,
            channels,
            data: vec![0.0f32; size],
        })
    }

    /// Create an image from raw interleaved sample data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length does
    /// not equal `width * height * channels`.
    pub fn from_data(width: u32, height: u32, channels: Channels, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize) * channels.count();
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{}x{} = {}",
                data.len(),
                width,
                height,
                channels.count(),
                expected
            )));
        }

        Ok(FImage {
            width,
            height,
            channels,
            data,
        })
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel layout
    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw sample data
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable raw sample data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consume the image and return its sample data
    #[inline]
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32, c: usize) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * self.channels.count() + c
    }

    /// Get the sample at (x, y, channel)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get(&self, x: u32, y: u32, c: usize) -> Result<f32> {
        if x >= self.width || y >= self.height || c >= self.channels.count() {
            return Err(Error::IndexOutOfBounds {
                index: self.index(x.min(self.width), y.min(self.height), c),
                len: self.data.len(),
            });
        }
        Ok(self.data[self.index(x, y, c)])
    }

    /// Set the sample at (x, y, channel)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, c: usize, value: f32) -> Result<()> {
        if x >= self.width || y >= self.height || c >= self.channels.count() {
            return Err(Error::IndexOutOfBounds {
                index: self.index(x.min(self.width), y.min(self.height), c),
                len: self.data.len(),
            });
        }
        let idx = self.index(x, y, c);
        self.data[idx] = value;
        Ok(())
    }

    /// Minimum sample value over all pixels and channels
    ///
    /// Assumes NaN-free data; a NaN sample is skipped by the fold.
    pub fn min(&self) -> f32 {
        self.data.iter().copied().fold(f32::INFINITY, f32::min)
    }

    /// Maximum sample value over all pixels and channels
    ///
    /// Assumes NaN-free data; a NaN sample is skipped by the fold.
    pub fn max(&self) -> f32 {
        self.data.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Extract a rectangular sub-region
    ///
    /// The rectangle must lie entirely inside the image.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the rectangle is empty or
    /// leaves the canvas.
    pub fn crop(&self, x: u32, y: u32, w: u32, h: u32) -> Result<FImage> {
        check_crop_rect(self.width, self.height, x, y, w, h)?;

        let spp = self.channels.count();
        let src_stride = (self.width as usize) * spp;
        let dst_stride = (w as usize) * spp;
        let mut data = Vec::with_capacity(dst_stride * (h as usize));

        for row in y..y + h {
            let start = (row as usize) * src_stride + (x as usize) * spp;
            data.extend_from_slice(&self.data[start..start + dst_stride]);
        }

        FImage::from_data(w, h, self.channels, data)
    }
}
