//! CIE XYZ tristimulus values
//!
//! XYZ is the reference space every RGB space in chromat is mapped through.

use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::color::Chromaticity;
use crate::math::Matrix3x3;

/// CIE 1931 XYZ tristimulus vector
///
/// Vectors derived from a chromaticity have Y = 1 (unit luminance).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Scale all components by a factor
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Project back onto the chromaticity diagram
    ///
    /// Returns None for the zero vector (or any vector whose components sum
    /// to zero), which has no chromaticity.
    pub fn chromaticity(&self) -> Option<Chromaticity> {
        let sum = self.x + self.y + self.z;
        if sum == 0.0 || !sum.is_finite() {
            return None;
        }
        Some(Chromaticity::new(self.x / sum, self.y / sum))
    }

    /// Apply a column-convention matrix: `M × xyz`
    #[inline]
    pub fn transform(&self, matrix: &Matrix3x3) -> Self {
        Self::from_array(matrix.multiply_vec(self.to_array()))
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}

impl Mul<f64> for Xyz {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}
