//! Steering-label corrections
//!
//! When an augmented frame simulates a perturbed camera viewpoint — a
//! small heading rotation or a lateral shift such as a side-mounted
//! camera — the steering label recorded for the original viewpoint no
//! longer matches the image. These functions recompute the label.
//!
//! Steering values are normalized to [-1, 1]; [`STEERING_FACTOR`] maps
//! one steering unit to degrees of wheel angle.
//!
//! The numeric recipes are load-bearing: labels produced here feed model
//! training, so the exact order of operations (including the full
//! tangent/arctangent round trip in the offset correction) is kept
//! rather than replaced with small-angle approximations.

use crate::{AugmentError, AugmentResult};

/// Degrees of wheel angle per steering unit
pub const STEERING_FACTOR: f64 = 25.0;

/// Conventional projection distance for offset corrections
pub const DEFAULT_STEERING_DISTANCE: f64 = 1.0;

/// Correct a steering label for a rotated viewpoint
///
/// A camera rotated by `view_angle` degrees requires a proportional
/// steering correction: `clamp(steering + view_angle / 25, -1, 1)`.
///
/// # Examples
///
/// ```
/// use steervision_augment::adjust_steering_by_angle;
///
/// assert_eq!(adjust_steering_by_angle(0.0, 25.0), 1.0);
/// assert_eq!(adjust_steering_by_angle(0.25, 0.0), 0.25);
/// ```
pub fn adjust_steering_by_angle(steering: f64, view_angle: f64) -> f64 {
    (steering + view_angle / STEERING_FACTOR).clamp(-1.0, 1.0)
}

/// Correct a steering label for a laterally shifted viewpoint
///
/// Projects the current trajectory over `steering_distance`, adds the
/// lateral `view_offset`, and recomputes the angle that cancels the net
/// displacement over the same distance:
///
/// 1. `alpha = steering * 25`
/// 2. `b = tan(radians(alpha)) * steering_distance + view_offset`
/// 3. `alpha2 = degrees(atan(-b) / steering_distance)`
/// 4. `clamp(alpha2 / 25, -1, 1)`
///
/// Callers conventionally pass [`DEFAULT_STEERING_DISTANCE`].
///
/// # Errors
///
/// Returns `AugmentError::InvalidParameter` when `steering_distance` is
/// zero (the recipe divides by it).
pub fn adjust_steering_by_offset(
    steering: f64,
    view_offset: f64,
    steering_distance: f64,
) -> AugmentResult<f64> {
    if steering_distance == 0.0 {
        return Err(AugmentError::InvalidParameter(
            "steering_distance must be nonzero".to_string(),
        ));
    }

    let alpha = steering * STEERING_FACTOR;
    let b = alpha.to_radians().tan() * steering_distance + view_offset;
    let alpha2 = ((-b).atan() / steering_distance).to_degrees();
    Ok((alpha2 / STEERING_FACTOR).clamp(-1.0, 1.0))
}
