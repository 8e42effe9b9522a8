//! Affine warp primitive
//!
//! This module provides the shared machinery under shear and rotate:
//! - Affine map construction (identity, translation, scaling, rotation,
//!   horizontal shear) and composition/inversion
//! - Inverse-mapped warping with bilinear sampling
//!
//! # Affine Map
//!
//! A map is six coefficients applied in (x = column, y = row) coordinates:
//! ```text
//! x' = a*x + b*y + tx
//! y' = c*x + d*y + ty
//! ```
//!
//! # Warping
//!
//! [`warp`] consumes the *inverse* map: for every output pixel it
//! transforms the output coordinates into the source image and samples
//! there bilinearly. [`WarpFill::Edge`] clamps out-of-canvas source
//! coordinates to the nearest edge pixel, so warps never introduce
//! border fill of their own.

use crate::{TransformError, TransformResult};
use steervision_core::FImage;

/// Background policy for source samples outside the canvas
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WarpFill {
    /// Extend edge pixels outward (clamp source coordinates)
    #[default]
    Edge,
    /// Fill with a constant sample value
    Constant(f32),
}

/// 2D affine transformation (6 coefficients)
///
/// Represents the transformation:
/// ```text
/// x' = coeffs[0]*x + coeffs[1]*y + coeffs[2]
/// y' = coeffs[3]*x + coeffs[4]*y + coeffs[5]
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AffineMap {
    /// Coefficients [a, b, tx, c, d, ty]
    coeffs: [f32; 6],
}

impl Default for AffineMap {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineMap {
    /// Create the identity transformation
    pub fn identity() -> Self {
        Self {
            coeffs: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        }
    }

    /// Create from raw coefficients
    pub fn from_coeffs(coeffs: [f32; 6]) -> Self {
        Self { coeffs }
    }

    /// Get the raw coefficients
    pub fn coeffs(&self) -> &[f32; 6] {
        &self.coeffs
    }

    /// Create a translation map
    pub fn translation(tx: f32, ty: f32) -> Self {
        Self {
            coeffs: [1.0, 0.0, tx, 0.0, 1.0, ty],
        }
    }

    /// Create a scaling map about the origin
    pub fn scaling(sx: f32, sy: f32) -> Self {
        Self {
            coeffs: [sx, 0.0, 0.0, 0.0, sy, 0.0],
        }
    }

    /// Create a rotation by `theta` radians about (cx, cy)
    ///
    /// Positive angles rotate from the +x axis toward the +y axis, which
    /// with row-major y-down coordinates is clockwise on screen.
    pub fn rotation(cx: f32, cy: f32, theta: f32) -> Self {
        let cos = theta.cos();
        let sin = theta.sin();
        Self {
            coeffs: [
                cos,
                -sin,
                cx - cos * cx + sin * cy,
                sin,
                cos,
                cy - sin * cx - cos * cy,
            ],
        }
    }

    /// Create a horizontal shear
    ///
    /// Shifts each row by `sin(radang) * (y - height)`, leaving the line
    /// `y = height` invariant:
    /// ```text
    /// | 1  sin(a)  -height*sin(a) |
    /// | 0  1        0             |
    /// ```
    pub fn shear_x(radang: f32, height: f32) -> Self {
        let sin = radang.sin();
        Self {
            coeffs: [1.0, sin, -height * sin, 0.0, 1.0, 0.0],
        }
    }

    /// Compose two maps: the returned map applies `other` first, then `self`
    pub fn compose(&self, other: &Self) -> Self {
        let [a1, b1, tx1, c1, d1, ty1] = self.coeffs;
        let [a2, b2, tx2, c2, d2, ty2] = other.coeffs;
        Self {
            coeffs: [
                a1 * a2 + b1 * c2,
                a1 * b2 + b1 * d2,
                a1 * tx2 + b1 * ty2 + tx1,
                c1 * a2 + d1 * c2,
                c1 * b2 + d1 * d2,
                c1 * tx2 + d1 * ty2 + ty1,
            ],
        }
    }

    /// Compute the inverse map
    ///
    /// # Errors
    ///
    /// Returns `TransformError::SingularMatrix` when the linear part is
    /// not invertible.
    pub fn inverse(&self) -> TransformResult<Self> {
        let [a, b, tx, c, d, ty] = self.coeffs;
        let det = a * d - b * c;
        if det.abs() < 1e-12 {
            return Err(TransformError::SingularMatrix);
        }
        let ia = d / det;
        let ib = -b / det;
        let ic = -c / det;
        let id = a / det;
        Ok(Self {
            coeffs: [
                ia,
                ib,
                -(ia * tx + ib * ty),
                ic,
                id,
                -(ic * tx + id * ty),
            ],
        })
    }

    /// Transform a point through this map
    #[inline]
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        let [a, b, tx, c, d, ty] = self.coeffs;
        (a * x + b * y + tx, c * x + d * y + ty)
    }
}

/// Warp an image through an inverse affine map
///
/// For every output pixel (x, y), the map produces source coordinates
/// and the source is sampled bilinearly there. The output canvas equals
/// the input canvas.
///
/// # Arguments
/// * `src` - Source image
/// * `inverse_map` - Map from output coordinates to source coordinates
/// * `fill` - Policy for source coordinates outside the canvas
pub fn warp(src: &FImage, inverse_map: &AffineMap, fill: WarpFill) -> TransformResult<FImage> {
    let w = src.width();
    let h = src.height();
    let spp = src.channels().count();

    let mut out = FImage::new(w, h, src.channels())?;

    let max_x = (w - 1) as f32;
    let max_y = (h - 1) as f32;
    let src_data = src.data();
    let out_data = out.data_mut();

    for y in 0..h {
        for x in 0..w {
            let (sx, sy) = inverse_map.apply(x as f32, y as f32);

            let out_idx = ((y as usize) * (w as usize) + (x as usize)) * spp;

            if let WarpFill::Constant(value) = fill
                && (sx < 0.0 || sx > max_x || sy < 0.0 || sy > max_y)
            {
                for c in 0..spp {
                    out_data[out_idx + c] = value;
                }
                continue;
            }

            // Edge extension: clamp the source point onto the canvas
            let sx = sx.clamp(0.0, max_x);
            let sy = sy.clamp(0.0, max_y);

            let x0 = sx.floor() as u32;
            let y0 = sy.floor() as u32;
            let x1 = (x0 + 1).min(w - 1);
            let y1 = (y0 + 1).min(h - 1);
            let fx = sx - x0 as f32;
            let fy = sy - y0 as f32;

            let row0 = (y0 as usize) * (w as usize);
            let row1 = (y1 as usize) * (w as usize);
            let i00 = (row0 + x0 as usize) * spp;
            let i10 = (row0 + x1 as usize) * spp;
            let i01 = (row1 + x0 as usize) * spp;
            let i11 = (row1 + x1 as usize) * spp;

            for c in 0..spp {
                let v00 = src_data[i00 + c];
                let v10 = src_data[i10 + c];
                let v01 = src_data[i01 + c];
                let v11 = src_data[i11 + c];
                let top = v00 + fx * (v10 - v00);
                let bottom = v01 + fx * (v11 - v01);
                out_data[out_idx + c] = top + fy * (bottom - top);
            }
        }
    }

    Ok(out)
}
