//! 3x3 Matrix operations for color space transforms
//!
//! Convention used throughout chromat: column vectors multiplied on the right,
//! `v' = M × v`. Matrices are stored row-major, so `m[row][col]`.
//! All operations use f64.

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Relative determinant threshold below which a matrix is treated as singular.
///
/// Compared against `|det| / Π‖row_i‖`, which is at most 1 (Hadamard bound),
/// so the test does not depend on the overall scale of the matrix.
pub const SINGULAR_THRESHOLD: f64 = 1e-10;

/// A 3x3 matrix for color space transformations
///
/// Stored in row-major order: m[row][col]. Serializes as an array of rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix3x3 {
    /// Matrix elements in row-major order
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    /// Create a new matrix from row-major elements
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Create a matrix whose columns are the given vectors
    #[inline]
    pub const fn from_columns(c: [[f64; 3]; 3]) -> Self {
        Self {
            m: [
                [c[0][0], c[1][0], c[2][0]],
                [c[0][1], c[1][1], c[2][1]],
                [c[0][2], c[1][2], c[2][2]],
            ],
        }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::diagonal(1.0, 1.0, 1.0)
    }

    /// Create a diagonal matrix from three values
    #[inline]
    pub const fn diagonal(d0: f64, d1: f64, d2: f64) -> Self {
        Self {
            m: [[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]],
        }
    }

    /// Column `index` as a vector
    #[inline]
    pub fn column(&self, index: usize) -> [f64; 3] {
        [self.m[0][index], self.m[1][index], self.m[2][index]]
    }

    /// Multiply this matrix by a 3-element column vector
    ///
    /// Returns M × v
    #[inline]
    pub fn multiply_vec(&self, v: [f64; 3]) -> [f64; 3] {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1] + self.m[0][2] * v[2],
            self.m[1][0] * v[0] + self.m[1][1] * v[1] + self.m[1][2] * v[2],
            self.m[2][0] * v[0] + self.m[2][1] * v[1] + self.m[2][2] * v[2],
        ]
    }

    /// Multiply this matrix by another matrix
    ///
    /// Returns self × other, i.e. `other` is applied to a vector first.
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = Self::new([[0.0; 3]; 3]);
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        result
    }

    /// Scale each column by the matching entry of `s`
    ///
    /// Equivalent to `self × diag(s)` without forming the diagonal matrix.
    #[inline]
    pub fn scale_columns(&self, s: [f64; 3]) -> Self {
        let m = &self.m;
        Self {
            m: [
                [m[0][0] * s[0], m[0][1] * s[1], m[0][2] * s[2]],
                [m[1][0] * s[0], m[1][1] * s[1], m[1][2] * s[2]],
                [m[2][0] * s[0], m[2][1] * s[1], m[2][2] * s[2]],
            ],
        }
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_columns(self.m)
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Check whether the determinant is negligible relative to the row norms
    pub fn is_singular(&self) -> bool {
        let det = self.determinant();
        let bound: f64 = self
            .m
            .iter()
            .map(|row| (row[0] * row[0] + row[1] * row[1] + row[2] * row[2]).sqrt())
            .product();

        !det.is_finite() || bound == 0.0 || det.abs() <= SINGULAR_THRESHOLD * bound
    }

    /// Calculate the inverse of this matrix by cofactor expansion
    ///
    /// Returns None if the matrix is singular (see [`Matrix3x3::is_singular`])
    pub fn inverse(&self) -> Option<Self> {
        if self.is_singular() {
            return None;
        }

        let inv_det = 1.0 / self.determinant();
        let m = &self.m;

        // Adjugate divided by determinant
        Some(Self {
            m: [
                [
                    (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                    (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                    (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
                ],
                [
                    (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                    (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                    (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
                ],
                [
                    (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                    (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                    (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
                ],
            ],
        })
    }

    /// Invert, reporting a singular matrix as [`Error::SingularMatrix`]
    ///
    /// `context` names the derivation step for the error message.
    pub fn try_inverse(&self, context: &'static str) -> Result<Self> {
        self.inverse().ok_or_else(|| {
            tracing::warn!(
                determinant = self.determinant(),
                context,
                "refusing to invert singular matrix"
            );
            Error::SingularMatrix { context }
        })
    }

    /// Largest absolute element-wise difference to another matrix
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        let mut max = 0.0f64;
        for i in 0..3 {
            for j in 0..3 {
                max = max.max((self.m[i][j] - other.m[i][j]).abs());
            }
        }
        max
    }

    /// Check if this matrix is approximately equal to another
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.max_abs_diff(other) <= epsilon
    }

    /// Check if this is approximately an identity matrix
    #[inline]
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Matrix3x3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(8);
        for (i, row) in self.m.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "[{:>w$.p$}, {:>w$.p$}, {:>w$.p$}]",
                row[0],
                row[1],
                row[2],
                w = precision + 3,
                p = precision
            )?;
        }
        Ok(())
    }
}

impl Index<usize> for Matrix3x3 {
    type Output = [f64; 3];

    fn index(&self, row: usize) -> &Self::Output {
        &self.m[row]
    }
}

impl IndexMut<usize> for Matrix3x3 {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.m[row]
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<[f64; 3]> for Matrix3x3 {
    type Output = [f64; 3];

    fn mul(self, rhs: [f64; 3]) -> Self::Output {
        self.multiply_vec(rhs)
    }
}
