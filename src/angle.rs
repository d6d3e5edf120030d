//! Units for angles.

use std::f64::consts::{FRAC_1_PI, PI};

/// The unit in which angles are passed to or returned from a conversion.
///
/// Every operation taking or producing angles requires the unit explicitly;
/// there is no default.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Returns [`AngleUnit::Degrees`] if `in_degrees` is `true`, otherwise
    /// [`AngleUnit::Radians`].
    #[inline]
    pub const fn from_degrees_flag(in_degrees: bool) -> Self {
        if in_degrees {
            Self::Degrees
        } else {
            Self::Radians
        }
    }

    /// Whether this is [`AngleUnit::Degrees`].
    #[inline]
    pub const fn is_degrees(self) -> bool {
        matches!(self, Self::Degrees)
    }

    /// Converts the given angle in this unit to radians.
    #[inline]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Radians => angle,
            Self::Degrees => degrees_to_radians(angle),
        }
    }

    /// Converts the given angle in radians to this unit.
    #[inline]
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            Self::Radians => radians,
            Self::Degrees => radians_to_degrees(radians),
        }
    }
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 * FRAC_1_PI)
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}
