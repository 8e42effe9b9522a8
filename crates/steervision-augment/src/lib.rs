//! steervision-augment - Steering corrections and preprocessing
//!
//! This crate holds the label-side and pipeline-side halves of the
//! augmentation story:
//!
//! - Steering corrections for perturbed viewpoints
//!   ([`adjust_steering_by_angle`], [`adjust_steering_by_offset`])
//! - The fixed model-input pipeline ([`preprocess`]: resize, crop,
//!   min-max normalize)
//! - A seeded random augmentation policy ([`Augmenter`]) that applies
//!   flips and shears while keeping labels consistent

mod error;
pub mod preprocess;
pub mod random;
pub mod steering;

pub use error::{AugmentError, AugmentResult};
pub use preprocess::{
    CROP_BOTTOM, CROP_TOP, MODEL_INPUT_HEIGHT, MODEL_INPUT_WIDTH, normalize, preprocess,
    preprocess_float,
};
pub use random::{AugmentOptions, Augmented, Augmenter};
pub use steering::{
    DEFAULT_STEERING_DISTANCE, STEERING_FACTOR, adjust_steering_by_angle,
    adjust_steering_by_offset,
};
