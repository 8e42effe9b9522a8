//! 2-D floating-point plane
//!
//! `Plane` is a plain H×W array of `f32` values with no channel axis —
//! the form a grayscale frame takes for display and classical image
//! processing, as opposed to the H×W×1 form neural-network input layers
//! expect. [`add_gray_dimension`](crate::add_gray_dimension) and
//! [`drop_gray_dimension`](crate::drop_gray_dimension) convert between
//! the two.

use crate::error::{Error, Result};

/// 2-D array of `f32` values in row-major order
///
/// # Examples
///
/// ```
/// use steervision_core::Plane;
///
/// let mut plane = Plane::new(64, 64).unwrap();
/// plane.set(10, 20, 0.5).unwrap();
/// assert_eq!(plane.get(10, 20).unwrap(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// Width in samples
    width: u32,
    /// Height in samples
    height: u32,
    /// Sample data (row-major, no padding)
    data: Vec<f32>,
}

impl Plane {
    /// Create a new plane with all samples set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(Plane {
            width,
            height,
            data: vec![0.0f32; size],
        })
    }

    /// Create a plane from raw data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length
    /// doesn't match `width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected
            )));
        }

        Ok(Plane {
            width,
            height,
            data,
        })
    }

    /// Plane width in samples
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Plane height in samples
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
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

    /// Consume the plane and return its sample data
    #[inline]
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// Get the sample at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Result<f32> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.data.len(),
            });
        }
        Ok(self.data[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Set the sample at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.data.len(),
            });
        }
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx] = value;
        Ok(())
    }
}
