//! 8-bit image container
//!
//! `Image` is the container for camera frames as they come off the decoder:
//! row-major, channel-interleaved 8-bit samples with 1 (grayscale) or
//! 3 (RGB) channels. Pixel math that needs fractional precision converts
//! to [`FImage`](crate::FImage) first.
//!
//! # Memory Layout
//!
//! The sample for channel `c` of the pixel at (x, y) is at index
//! `(y * width + x) * channels + c`. Rows are contiguous with no padding.

use crate::error::{Error, Result};
use crate::fimage::FImage;

/// Channel layout of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    /// Single grayscale channel
    Gray,
    /// Three interleaved channels in red, green, blue order
    Rgb,
}

impl Channels {
    /// Number of samples per pixel
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
        }
    }

    /// Map a sample count to a channel layout
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidChannels` for counts other than 1 and 3.
    pub fn from_count(count: usize) -> Result<Self> {
        match count {
            1 => Ok(Channels::Gray),
            3 => Ok(Channels::Rgb),
            other => Err(Error::InvalidChannels(other)),
        }
    }
}

/// 8-bit image with interleaved channels
///
/// # Examples
///
/// ```
/// use steervision_core::{Channels, Image};
///
/// let mut image = Image::new(320, 160, Channels::Rgb).unwrap();
/// image.set(10, 20, 0, 255).unwrap();
/// assert_eq!(image.get(10, 20, 0).unwrap(), 255);
/// assert_eq!(image.get(10, 20, 1).unwrap(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Channel layout
    channels: Channels,
    /// Sample data (row-major, interleaved, no padding)
    data: Vec<u8>,
}

impl Image {
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
        Ok(Image {
            width,
            height,
            channels,
            data: vec![0u8; size],
        })
    }

    /// Create an image from raw interleaved sample data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length does
    /// not equal `width * height * channels`.
    pub fn from_data(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
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

        Ok(Image {
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
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw sample data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
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
    pub fn get(&self, x: u32, y: u32, c: usize) -> Result<u8> {
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
    pub fn set(&mut self, x: u32, y: u32, c: usize, value: u8) -> Result<()> {
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

    /// Interleaved samples of row `y`
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `y` is out of range.
    pub fn row(&self, y: u32) -> Result<&[u8]> {
        if y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height as usize,
            });
        }
        let stride = (self.width as usize) * self.channels.count();
        let start = (y as usize) * stride;
        Ok(&self.data[start..start + stride])
    }

    /// Extract a rectangular sub-region
    ///
    /// Unlike clip-to-canvas croppers, the rectangle must lie entirely
    /// inside the image.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the rectangle is empty or
    /// leaves the canvas.
    pub fn crop(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Image> {
        check_crop_rect(self.width, self.height, x, y, w, h)?;

        let spp = self.channels.count();
        let src_stride = (self.width as usize) * spp;
        let dst_stride = (w as usize) * spp;
        let mut data = Vec::with_capacity(dst_stride * (h as usize));

        for row in y..y + h {
            let start = (row as usize) * src_stride + (x as usize) * spp;
            data.extend_from_slice(&self.data[start..start + dst_stride]);
        }

        Image::from_data(w, h, self.channels, data)
    }

    /// Numeric cast to `f32`, sample values preserved
    ///
    /// The `[0, 255]` range is kept as-is; use [`to_float_scaled`] for the
    /// `[0, 1]` convention of the warp-based transforms.
    ///
    /// [`to_float_scaled`]: Image::to_float_scaled
    pub fn to_float(&self) -> FImage {
        let data = self.data.iter().map(|&v| v as f32).collect();
        FImage::from_data(self.width, self.height, self.channels, data)
            .expect("source image dimensions are valid")
    }

    /// Convert to `f32` scaled into `[0, 1]` (sample / 255)
    pub fn to_float_scaled(&self) -> FImage {
        let data = self.data.iter().map(|&v| v as f32 / 255.0).collect();
        FImage::from_data(self.width, self.height, self.channels, data)
            .expect("source image dimensions are valid")
    }
}

/// Validate a crop rectangle against a canvas
pub(crate) fn check_crop_rect(
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
) -> Result<()> {
    if w == 0 || h == 0 {
        return Err(Error::InvalidParameter(format!(
            "empty crop rectangle: {}x{}",
            w, h
        )));
    }
    if x.checked_add(w).is_none_or(|right| right > width)
        || y.checked_add(h).is_none_or(|bottom| bottom > height)
    {
        return Err(Error::InvalidParameter(format!(
            "crop rectangle ({}, {}) {}x{} leaves the {}x{} canvas",
            x, y, w, h, width, height
        )));
    }
    Ok(())
}
