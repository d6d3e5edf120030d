//! Conversion between quaternions and rotation matrices.

use crate::{
    consts::MIN_NORM,
    error::{OrientationError, Result},
    quaternion::Quaternion,
};
use log::{debug, trace};

/// A 3x3 rotation matrix indexed as `matrix[row][column]`. It rotates column
/// vectors by left-multiplication.
pub type RotationMatrix = [[f64; 3]; 3];

/// The quaternion component that Shepherd's method solves for first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pivot {
    W,
    X,
    Y,
    Z,
}

impl Quaternion {
    /// Creates the quaternion corresponding to the given rotation matrix.
    ///
    /// Uses Shepherd's method: the trace is used directly when it is
    /// positive, and otherwise the largest diagonal entry determines which
    /// component is computed first. The result is not renormalized.
    ///
    /// # Errors
    /// - [`OrientationError::DegenerateInput`] if any matrix entry is not
    ///   finite.
    /// - [`OrientationError::NotNormalized`] if the matrix is not a rotation
    ///   matrix, so that the resulting quaternion lacks unit norm.
    pub fn from_rotation_matrix(m: &RotationMatrix) -> Result<Self> {
        let trace = m[0][0] + m[1][1] + m[2][2];

        let (pivot, radicand) = if trace > 0.0 {
            (Pivot::W, trace + 1.0)
        } else if m[0][0] > m[1][1] && m[0][0] > m[2][2] {
            (Pivot::X, 1.0 + m[0][0] - m[1][1] - m[2][2])
        } else if m[1][1] > m[2][2] {
            (Pivot::Y, 1.0 - m[0][0] + m[1][1] - m[2][2])
        } else {
            (Pivot::Z, 1.0 - m[0][0] - m[1][1] + m[2][2])
        };

        // Four times the pivot component
        let s = 2.0 * radicand.sqrt();
        if s.is_nan() || s < MIN_NORM {
            debug!("Degenerate {pivot:?} pivot for matrix {m:?}");
            return Err(OrientationError::DegenerateInput {
                operation: "rotation matrix conversion",
                magnitude: s,
            });
        }
        trace!("Converting matrix with trace {trace} using {pivot:?} pivot");

        let q = match pivot {
            Pivot::W => Self::new(
                0.25 * s,
                (m[2][1] - m[1][2]) / s,
                (m[0][2] - m[2][0]) / s,
                (m[1][0] - m[0][1]) / s,
            ),
            Pivot::X => Self::new(
                (m[2][1] - m[1][2]) / s,
                0.25 * s,
                (m[0][1] + m[1][0]) / s,
                (m[0][2] + m[2][0]) / s,
            ),
            Pivot::Y => Self::new(
                (m[0][2] - m[2][0]) / s,
                (m[0][1] + m[1][0]) / s,
                0.25 * s,
                (m[1][2] + m[2][1]) / s,
            ),
            Pivot::Z => Self::new(
                (m[1][0] - m[0][1]) / s,
                (m[0][2] + m[2][0]) / s,
                (m[1][2] + m[2][1]) / s,
                0.25 * s,
            ),
        };

        let norm = q.norm();
        if !norm.is_finite() {
            debug!("Matrix {m:?} with non-finite entries gave quaternion {q}");
            return Err(OrientationError::DegenerateInput {
                operation: "rotation matrix conversion",
                magnitude: norm,
            });
        }
        q.ensure_normalized("rotation matrix conversion")?;

        Ok(q)
    }

    /// Computes the rotation matrix corresponding to the quaternion.
    ///
    /// # Errors
    /// [`OrientationError::NotNormalized`] if the quaternion does not have
    /// unit norm.
    pub fn to_rotation_matrix(&self) -> Result<RotationMatrix> {
        self.ensure_normalized("rotation matrix conversion")?;

        let [w, x, y, z] = self.to_array();

        Ok([
            [
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y - w * z),
                2.0 * (w * y + x * z),
            ],
            [
                2.0 * (w * z + y * x),
                1.0 - 2.0 * (z * z + x * x),
                2.0 * (y * z - w * x),
            ],
            [
                2.0 * (z * x - w * y),
                2.0 * (w * x + z * y),
                1.0 - 2.0 * (x * x + y * y),
            ],
        ])
    }
}
