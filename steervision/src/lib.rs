//! Steervision - Camera-frame preprocessing for steering-angle prediction
//!
//! Utilities for training pipelines that map road-camera images to
//! steering commands: image loading, geometric augmentation with
//! consistent steering-label corrections, and model-input normalization.
//!
//! # Overview
//!
//! - Image I/O (BMP, PNG, JPEG) decoding to RGB
//! - Geometric transforms (flip, shear, rotate, resize)
//! - Steering-label corrections for perturbed viewpoints
//! - The fixed resize/crop/normalize pipeline feeding the model
//!
//! # Example
//!
//! ```
//! use steervision::{Channels, Image, adjust_steering_by_angle, preprocess};
//!
//! let mut frame = Image::new(320, 160, Channels::Rgb).unwrap();
//! for x in 0..320 {
//!     frame.set(x, 100, 0, 255).unwrap(); // paint a lane marking
//! }
//! let input = preprocess(&frame).unwrap();
//! assert_eq!(input.dimensions(), (64, 64));
//!
//! let label = adjust_steering_by_angle(0.1, 5.0);
//! assert!((label - 0.3).abs() < 1e-12);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use steervision_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use steervision_augment as augment;
pub use steervision_io as io;
pub use steervision_transform as transform;

// The handful of entry points callers reach for constantly
pub use steervision_augment::{
    STEERING_FACTOR, adjust_steering_by_angle, adjust_steering_by_offset, preprocess,
    preprocess_float,
};
pub use steervision_io::load;
pub use steervision_transform::{flip_horizontal, rotate, shear};
