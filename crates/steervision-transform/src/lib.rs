//! steervision-transform - Geometric transforms for steering-camera frames
//!
//! This crate provides the geometric operations used for augmenting
//! steering-camera images:
//!
//! - Horizontal flip (exact mirror, for lane-symmetry augmentation)
//! - Horizontal shear (heading perturbation)
//! - Rotation about the pipeline's historical center convention
//! - Bilinear resize
//! - The affine warp primitive (inverse-map bilinear sampling with
//!   edge-extension fill) the shear and rotation are built on

pub mod affine;
mod error;
pub mod flip;
pub mod resize;
pub mod rotate;
pub mod shear;

pub use affine::{AffineMap, WarpFill, warp};
pub use error::{TransformError, TransformResult};
pub use flip::{flip_horizontal, flip_horizontal_float};
pub use resize::{resize, resize_float};
pub use rotate::{rotate, rotate_float};
pub use shear::{shear, shear_float};
