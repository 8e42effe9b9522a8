//! Error types for steervision-augment

use thiserror::Error;

/// Errors that can occur during augmentation and preprocessing
#[derive(Debug, Error)]
pub enum AugmentError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] steervision_core::Error),

    /// Geometric transform error
    #[error("transform error: {0}")]
    Transform(#[from] steervision_transform::TransformError),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for augmentation operations
pub type AugmentResult<T> = Result<T, AugmentError>;
