//! Steervision Core - Image containers for steering-angle preprocessing
//!
//! This crate provides the data structures used throughout the
//! steervision library:
//!
//! - [`Image`] - 8-bit image with interleaved channels (as decoded)
//! - [`FImage`] - floating-point image (warped / normalized frames)
//! - [`Plane`] - 2-D floating-point array without a channel axis
//! - [`Channels`] - channel layout (grayscale or RGB)
//!
//! Plus the grayscale channel-axis conversions
//! [`add_gray_dimension`] / [`drop_gray_dimension`].

pub mod channel;
pub mod error;
pub mod fimage;
pub mod image;
pub mod plane;

pub use channel::{add_gray_dimension, drop_gray_dimension};
pub use error::{Error, Result};
pub use fimage::FImage;
pub use image::{Channels, Image};
pub use plane::Plane;
