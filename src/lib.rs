//! Representation and conversion of 3D rotations.
//!
//! The central type is [`Quaternion`], which can be constructed from and
//! projected onto Bunge-Euler angles, angle-axis pairs and rotation matrices.
//! All operations are pure functions on plain values, so a [`Quaternion`] can
//! be freely shared between threads. Random rotations are drawn from an
//! injected [`rand::Rng`], see [`UniformRotation`].

#[macro_use]
mod macros;

pub mod angle;
pub mod angle_axis;
pub mod consts;
pub mod error;
pub mod euler;
pub mod quaternion;
pub mod random;
pub mod rotation_matrix;

pub use angle::AngleUnit;
pub use error::{OrientationError, Result};
pub use quaternion::Quaternion;
pub use random::UniformRotation;
pub use rotation_matrix::RotationMatrix;
