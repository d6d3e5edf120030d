//! Quaternions.

use crate::{
    consts::{MIN_NORM, UNIT_NORM_TOLERANCE},
    error::{OrientationError, Result},
};
use bytemuck::{Pod, Zeroable};
use log::debug;
use std::fmt;

/// A quaternion `q = w + x i + y j + z k`.
///
/// Quaternions used as rotations should have unit norm. The type does not
/// enforce this: products and scalings will drift away from unit norm, and
/// the caller is responsible for calling [`Quaternion::normalize`] when
/// needed. Operations that interpret the quaternion as an active rotation
/// ([`Quaternion::rotate_vector`], [`Quaternion::to_rotation_matrix`],
/// [`Quaternion::to_angle_axis`] and [`Quaternion::to_bunge_euler_angles`])
/// reject non-unit input with [`OrientationError::NotNormalized`] rather
/// than normalizing it behind the caller's back.
///
/// `q` and `-q` represent the same rotation. Use [`Quaternion::difference`]
/// to compare rotations.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    w: f64,
    x: f64,
    y: f64,
    z: f64,
}

impl Quaternion {
    /// Creates a new quaternion with the given real part `w` and imaginary
    /// parts `x`, `y` and `z`.
    #[inline]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// The quaternion representing no rotation.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Creates a quaternion from an array of components in (w, x, y, z)
    /// order.
    #[inline]
    pub fn from_array(components: [f64; 4]) -> Self {
        bytemuck::cast(components)
    }

    /// Returns the components as an array in (w, x, y, z) order.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        bytemuck::cast(*self)
    }

    #[inline]
    pub const fn w(&self) -> f64 {
        self.w
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns the imaginary part as a 3-vector.
    #[inline]
    pub const fn imag(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Computes the Euclidean norm of the four components. The zero
    /// quaternion has norm zero.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Returns the quaternion divided by its norm.
    ///
    /// # Errors
    /// [`OrientationError::DegenerateInput`] if the norm is too close to zero
    /// to divide by.
    pub fn normalize(&self) -> Result<Self> {
        let norm = self.norm();
        if norm.is_nan() || norm < MIN_NORM {
            debug!("Refusing to normalize quaternion {self} with norm {norm:e}");
            return Err(OrientationError::DegenerateInput {
                operation: "quaternion normalization",
                magnitude: norm,
            });
        }
        Ok(Self::new(
            self.w / norm,
            self.x / norm,
            self.y / norm,
            self.z / norm,
        ))
    }

    /// Divides the quaternion by its norm in place. The quaternion is left
    /// unchanged if an error is returned.
    ///
    /// # Errors
    /// See [`Quaternion::normalize`].
    pub fn normalize_mut(&mut self) -> Result<()> {
        *self = self.normalize()?;
        Ok(())
    }

    /// Returns the conjugate `w - x i - y j - z k`, which for a unit
    /// quaternion represents the inverse rotation.
    #[inline]
    pub const fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    #[inline]
    pub fn conjugate_mut(&mut self) {
        *self = self.conjugate();
    }

    /// Returns the quaternion with every component multiplied by `scale`.
    /// Only a scale of ±1 preserves the rotation.
    #[inline]
    pub fn scaled(&self, scale: f64) -> Self {
        Self::new(
            self.w * scale,
            self.x * scale,
            self.y * scale,
            self.z * scale,
        )
    }

    #[inline]
    pub fn scale_mut(&mut self, scale: f64) {
        *self = self.scaled(scale);
    }

    /// Computes a distance between the rotations represented by the two
    /// quaternions.
    ///
    /// The summed absolute component differences are computed both for
    /// `self - other` and for `self + other`, and the smaller value is
    /// returned, so that `q` and `-q` have zero difference.
    pub fn difference(&self, other: &Self) -> f64 {
        let a = self.to_array();
        let b = other.to_array();

        let direct: f64 = a.iter().zip(&b).map(|(a, b)| (a - b).abs()).sum();
        let flipped: f64 = a.iter().zip(&b).map(|(a, b)| (a + b).abs()).sum();

        direct.min(flipped)
    }

    /// Whether the two quaternions represent the same rotation, meaning that
    /// their [`Quaternion::difference`] does not exceed `tolerance`.
    #[inline]
    pub fn represents_same_rotation(&self, other: &Self, tolerance: f64) -> bool {
        self.difference(other) <= tolerance
    }

    /// Applies the rotation to the given vector, computing `q v q⁻¹`.
    ///
    /// # Errors
    /// [`OrientationError::NotNormalized`] if the quaternion does not have
    /// unit norm.
    pub fn rotate_vector(&self, vector: &[f64; 3]) -> Result<[f64; 3]> {
        self.ensure_normalized("vector rotation")?;
        Ok(self.rotate_vector_unchecked(vector))
    }

    /// Computes `q v q*` without checking the norm of the quaternion. For a
    /// unit quaternion this is the rotated vector. Otherwise the vector is
    /// both rotated and scaled by the squared norm of the quaternion.
    pub fn rotate_vector_unchecked(&self, vector: &[f64; 3]) -> [f64; 3] {
        let Self { w, x, y, z } = *self;
        let [vx, vy, vz] = *vector;

        let (ww, xx, yy, zz) = (w * w, x * x, y * y, z * z);

        [
            (ww + xx - yy - zz) * vx + 2.0 * ((x * y - w * z) * vy + (x * z + w * y) * vz),
            (ww - xx + yy - zz) * vy + 2.0 * ((x * y + w * z) * vx + (y * z - w * x) * vz),
            (ww - xx - yy + zz) * vz + 2.0 * ((x * z - w * y) * vx + (y * z + w * x) * vy),
        ]
    }

    /// Returns an error if the norm deviates from unity by more than
    /// [`UNIT_NORM_TOLERANCE`].
    pub(crate) fn ensure_normalized(&self, operation: &'static str) -> Result<()> {
        let norm = self.norm();
        // Written so that a NaN norm fails the check
        if (norm - 1.0).abs() <= UNIT_NORM_TOLERANCE {
            Ok(())
        } else {
            debug!("Quaternion {self} passed to {operation} has norm {norm}");
            Err(OrientationError::NotNormalized { operation, norm })
        }
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {}i + {}j + {}k",
            self.w, self.x, self.y, self.z
        )
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(components: [f64; 4]) -> Self {
        Self::from_array(components)
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(quaternion: Quaternion) -> Self {
        quaternion.to_array()
    }
}

// Hamilton product. For rotations, `a * b` applies `b` first and then `a`.
impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(
        a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
        a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
        a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
    )
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, Quaternion, |a, b| {
    *a = &*a * b;
});

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |q| { q.scaled(-1.0) });

impl_abs_diff_eq!(Quaternion, |a, b, epsilon| {
    a.w.abs_diff_eq(&b.w, epsilon)
        && a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
});

impl_relative_eq!(Quaternion, |a, b, epsilon, max_relative| {
    a.w.relative_eq(&b.w, epsilon, max_relative)
        && a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
});

#[cfg(feature = "nalgebra")]
mod nalgebra_interop {
    use super::*;

    impl From<Quaternion> for nalgebra::Quaternion<f64> {
        fn from(q: Quaternion) -> Self {
            Self::new(q.w, q.x, q.y, q.z)
        }
    }

    impl From<nalgebra::Quaternion<f64>> for Quaternion {
        fn from(q: nalgebra::Quaternion<f64>) -> Self {
            Self::new(q.w, q.i, q.j, q.k)
        }
    }

    impl From<nalgebra::UnitQuaternion<f64>> for Quaternion {
        fn from(q: nalgebra::UnitQuaternion<f64>) -> Self {
            q.into_inner().into()
        }
    }

    impl TryFrom<Quaternion> for nalgebra::UnitQuaternion<f64> {
        type Error = OrientationError;

        fn try_from(q: Quaternion) -> Result<Self> {
            q.ensure_normalized("conversion to nalgebra::UnitQuaternion")?;
            Ok(Self::new_unchecked(q.into()))
        }
    }
}
