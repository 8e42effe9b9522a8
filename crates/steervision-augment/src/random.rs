//! Random augmentation policy
//!
//! Draws per-frame augmentations and keeps the steering label consistent
//! with the transformed image:
//!
//! - horizontal flip with probability `flip_prob`, negating the label
//! - horizontal shear by a uniform angle in `[-shear_range, shear_range]`
//!   degrees, correcting the label through
//!   [`adjust_steering_by_angle`](crate::adjust_steering_by_angle)
//!
//! Seeded construction makes an augmentation stream reproducible across
//! runs.

use crate::steering::adjust_steering_by_angle;
use crate::{AugmentError, AugmentResult};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use steervision_core::{FImage, Image};
use steervision_transform::{flip_horizontal, shear};

/// Augmentation policy parameters
#[derive(Debug, Clone, Copy)]
pub struct AugmentOptions {
    /// Probability of a horizontal flip, in [0, 1]
    pub flip_prob: f64,
    /// Maximum shear angle in degrees; 0 disables shearing
    pub shear_range: f64,
}

impl Default for AugmentOptions {
    fn default() -> Self {
        Self {
            flip_prob: 0.5,
            shear_range: 0.0,
        }
    }
}

/// An augmented frame with its corrected steering label
#[derive(Debug, Clone)]
pub struct Augmented {
    /// The augmented frame, in [0, 1] floating point
    pub image: FImage,
    /// Steering label consistent with the frame
    pub steering: f64,
}

/// Draws augmentations for a stream of labeled frames
#[derive(Debug)]
pub struct Augmenter {
    options: AugmentOptions,
    rng: StdRng,
}

impl Augmenter {
    /// Create an augmenter seeded from the operating system
    ///
    /// # Errors
    ///
    /// Returns `AugmentError::InvalidParameter` for a flip probability
    /// outside [0, 1] or a negative shear range.
    pub fn new(options: AugmentOptions) -> AugmentResult<Self> {
        Self::validate(&options)?;
        Ok(Self {
            options,
            rng: rand::make_rng::<StdRng>(),
        })
    }

    /// Create a deterministic augmenter from a seed
    ///
    /// # Errors
    ///
    /// Returns `AugmentError::InvalidParameter` for a flip probability
    /// outside [0, 1] or a negative shear range.
    pub fn with_seed(options: AugmentOptions, seed: u64) -> AugmentResult<Self> {
        Self::validate(&options)?;
        Ok(Self {
            options,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    fn validate(options: &AugmentOptions) -> AugmentResult<()> {
        if !(0.0..=1.0).contains(&options.flip_prob) {
            return Err(AugmentError::InvalidParameter(format!(
                "flip probability must be in [0, 1], got {}",
                options.flip_prob
            )));
        }
        if options.shear_range < 0.0 {
            return Err(AugmentError::InvalidParameter(format!(
                "shear range must be non-negative, got {}",
                options.shear_range
            )));
        }
        Ok(())
    }

    /// Augment one frame, returning the image and its corrected label
    pub fn augment(&mut self, image: &Image, steering: f64) -> AugmentResult<Augmented> {
        let mut steering = steering;

        let frame = if self.rng.random_bool(self.options.flip_prob) {
            steering = -steering;
            flip_horizontal(image)?
        } else {
            image.clone()
        };

        if self.options.shear_range > 0.0 {
            let angle = self
                .rng
                .random_range(-self.options.shear_range..=self.options.shear_range);
            let sheared = shear(&frame, angle as f32)?;
            steering = adjust_steering_by_angle(steering, angle);
            return Ok(Augmented {
                image: sheared,
                steering,
            });
        }

        Ok(Augmented {
            image: frame.to_float_scaled(),
            steering,
        })
    }
}
