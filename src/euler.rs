//! Conversion between quaternions and Bunge-Euler angles.
//!
//! Bunge-Euler angles `[φ₁, Φ, φ₂]` describe a rotation by `φ₁` about the z
//! axis, followed by `Φ` about the rotated x axis and `φ₂` about the twice
//! rotated z axis (the Z-X-Z convention common for crystal orientations).
//!
//! The decomposition follows Melcher et al., "Conversion of EBSD data by a
//! quaternion based algorithm to be used for grain structure simulations",
//! Technische Mechanik 30 (2010) 401-413.

use crate::{
    angle::AngleUnit, consts::GIMBAL_LOCK_TOLERANCE, error::Result, quaternion::Quaternion,
};
use log::trace;
use std::f64::consts::PI;

impl Quaternion {
    /// Creates the quaternion for the rotation described by the given
    /// Bunge-Euler angles `[φ₁, Φ, φ₂]`, expressed in the given unit.
    pub fn from_bunge_euler_angles(angles: [f64; 3], unit: AngleUnit) -> Self {
        let [(s0, c0), (s1, c1), (s2, c2)] =
            angles.map(|angle| (0.5 * unit.to_radians(angle)).sin_cos());

        Self::new(
            c0 * c1 * c2 - s0 * c1 * s2,
            c0 * s1 * c2 + s0 * s1 * s2,
            -c0 * s1 * s2 + s0 * s1 * c2,
            c0 * c1 * s2 + s0 * c1 * c2,
        )
    }

    /// Decomposes the rotation into Bunge-Euler angles `[φ₁, Φ, φ₂]`,
    /// expressed in the given unit.
    ///
    /// `φ₁` and `φ₂` lie in `(-π, π]` and `Φ` lies in `[0, π]`. When `Φ` is 0
    /// or π the first and last angles are not unique, and the whole rotation
    /// about z is assigned to `φ₁` with `φ₂` set to zero. Angles on this
    /// boundary therefore do not in general survive a round trip, although
    /// the rotation they describe does.
    ///
    /// # Errors
    /// [`OrientationError::NotNormalized`](crate::OrientationError::NotNormalized)
    /// if the quaternion does not have unit norm.
    pub fn to_bunge_euler_angles(&self, unit: AngleUnit) -> Result<[f64; 3]> {
        self.ensure_normalized("Bunge-Euler angle decomposition")?;

        let [w, x, y, z] = self.to_array();

        let angles = if x.abs() < GIMBAL_LOCK_TOLERANCE && y.abs() < GIMBAL_LOCK_TOLERANCE {
            trace!("Decomposing {self} into Euler angles with Φ = 0");
            [f64::atan2(2.0 * w * z, w * w - z * z), 0.0, 0.0]
        } else if w.abs() < GIMBAL_LOCK_TOLERANCE && z.abs() < GIMBAL_LOCK_TOLERANCE {
            trace!("Decomposing {self} into Euler angles with Φ = π");
            [f64::atan2(2.0 * x * y, x * x - y * y), PI, 0.0]
        } else {
            let chi = ((w * w + z * z) * (x * x + y * y)).sqrt();
            [
                f64::atan2(
                    (w * y + x * z) / 2.0 / chi,
                    (w * x - y * z) / 2.0 / chi,
                ),
                f64::atan2(2.0 * chi, w * w + z * z - (x * x + y * y)),
                f64::atan2(
                    (z * x - y * w) / 2.0 / chi,
                    (w * x + y * z) / 2.0 / chi,
                ),
            ]
        };

        Ok(angles.map(|angle| unit.from_radians(angle)))
    }
}
