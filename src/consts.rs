//! Numerical tolerances.

/// Maximum deviation of the norm from unity for a quaternion to be accepted
/// by operations that interpret it as a rotation.
pub const UNIT_NORM_TOLERANCE: f64 = 1e-6;

/// Magnitude below which a pair of quaternion components is considered zero
/// when detecting gimbal lock in the Bunge-Euler decomposition.
pub const GIMBAL_LOCK_TOLERANCE: f64 = 1e-10;

/// Smallest norm that may be divided by. Anything shorter is reported as
/// degenerate input.
pub const MIN_NORM: f64 = 1e-12;
