//! Conversion between quaternions and angle-axis pairs.

use crate::{
    angle::AngleUnit,
    consts::MIN_NORM,
    error::{OrientationError, Result},
    quaternion::Quaternion,
};
use log::debug;

impl Quaternion {
    /// Creates the quaternion for a rotation by `angle` (in the given unit)
    /// about `axis`. The axis does not have to be of unit length.
    ///
    /// # Errors
    /// [`OrientationError::DegenerateInput`] if the axis has zero length.
    pub fn from_angle_axis(angle: f64, axis: [f64; 3], unit: AngleUnit) -> Result<Self> {
        let axis_length = vector_norm(&axis);
        if axis_length.is_nan() || axis_length < MIN_NORM {
            debug!("Rotation axis {axis:?} has length {axis_length:e}");
            return Err(OrientationError::DegenerateInput {
                operation: "angle-axis construction",
                magnitude: axis_length,
            });
        }

        let (sin_half_angle, cos_half_angle) = (0.5 * unit.to_radians(angle)).sin_cos();
        let [x, y, z] = axis.map(|component| sin_half_angle * component / axis_length);

        Ok(Self::new(cos_half_angle, x, y, z))
    }

    /// Returns the rotation angle (in the given unit, within `[0, 2π]`) and
    /// the unit rotation axis.
    ///
    /// The angle is computed as `2 acos(w)`, which does not resolve angles
    /// below about 1e-8 radians: such rotations are reported with an angle of
    /// zero, although the axis is still accurate.
    ///
    /// # Errors
    /// - [`OrientationError::NotNormalized`] if the quaternion does not have
    ///   unit norm.
    /// - [`OrientationError::DegenerateInput`] if the quaternion represents
    ///   the identity rotation, for which the axis is undefined.
    pub fn to_angle_axis(&self, unit: AngleUnit) -> Result<(f64, [f64; 3])> {
        self.ensure_normalized("angle-axis decomposition")?;

        let imag = self.imag();
        let imag_length = vector_norm(&imag);
        if imag_length < MIN_NORM {
            debug!("Rotation axis of {self} is undefined");
            return Err(OrientationError::DegenerateInput {
                operation: "angle-axis decomposition",
                magnitude: imag_length,
            });
        }

        // The real part may exceed unity slightly for a normalized quaternion
        let angle = 2.0 * self.w().clamp(-1.0, 1.0).acos();
        let axis = imag.map(|component| component / imag_length);

        Ok((unit.from_radians(angle), axis))
    }
}

fn vector_norm(vector: &[f64; 3]) -> f64 {
    vector.iter().map(|component| component * component).sum::<f64>().sqrt()
}
