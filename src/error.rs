//! Errors for rotation conversions.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrientationError>;

#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum OrientationError {
    /// A quantity that must be divided by was zero or not finite.
    #[error("Degenerate input to {operation}: magnitude {magnitude:e} is too close to zero")]
    DegenerateInput {
        operation: &'static str,
        magnitude: f64,
    },

    /// An operation interpreting the quaternion as a rotation was given a
    /// quaternion without unit norm.
    #[error("Quaternion passed to {operation} is not normalized (norm {norm})")]
    NotNormalized { operation: &'static str, norm: f64 },
}
