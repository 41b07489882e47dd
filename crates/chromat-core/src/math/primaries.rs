//! RGB ↔ XYZ matrices from primaries and white point
//!
//! Given the chromaticities of the red, green and blue primaries and of the
//! reference white:
//!
//! 1. `P` has the primaries' tristimulus vectors (Y = 1) as columns.
//! 2. `S = P⁻¹ × W` scales each primary so that RGB (1, 1, 1) lands on the white.
//! 3. `M = P × diag(S)` maps linear RGB to XYZ; `M⁻¹` maps back.
//!
//! Reference: Lindbloom, "RGB/XYZ Matrices"
//! (http://www.brucelindbloom.com/index.html?Eqn_RGB_XYZ_Matrix.html)

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::color::Chromaticity;
use crate::math::Matrix3x3;

/// Tolerance for `M⁻¹ × M ≈ I`
pub const ROUNDTRIP_TOLERANCE: f64 = 1e-6;

/// Linear RGB → XYZ matrix together with its inverse
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbXyzMatrices {
    /// Linear RGB → XYZ
    pub to_xyz: Matrix3x3,
    /// XYZ → linear RGB
    pub from_xyz: Matrix3x3,
}

impl RgbXyzMatrices {
    /// Largest deviation of `from_xyz × to_xyz` from the identity
    pub fn roundtrip_error(&self) -> f64 {
        self.from_xyz
            .multiply(&self.to_xyz)
            .max_abs_diff(&Matrix3x3::identity())
    }

    /// Row 2 of `to_xyz`: the luminance weight of each primary
    #[inline]
    pub fn luminance_coefficients(&self) -> [f64; 3] {
        self.to_xyz[1]
    }
}

/// Build the linear RGB → XYZ matrix and its inverse
///
/// Fails with [`crate::Error::InvalidChromaticity`] if any coordinate has
/// y = 0, and with [`crate::Error::SingularMatrix`] if the primaries are
/// collinear or duplicated.
pub fn build_rgb_to_xyz(
    red: Chromaticity,
    green: Chromaticity,
    blue: Chromaticity,
    white: Chromaticity,
) -> Result<RgbXyzMatrices> {
    let xyz_r = red.to_xyz()?;
    let xyz_g = green.to_xyz()?;
    let xyz_b = blue.to_xyz()?;
    let xyz_w = white.to_xyz()?;

    let primaries =
        Matrix3x3::from_columns([xyz_r.to_array(), xyz_g.to_array(), xyz_b.to_array()]);
    let primaries_inv = primaries.try_inverse("inverting the primaries matrix")?;

    let scale = primaries_inv.multiply_vec(xyz_w.to_array());
    tracing::trace!(?scale, "primary scale factors");

    let to_xyz = primaries.scale_columns(scale);
    let from_xyz = to_xyz.try_inverse("inverting the RGB to XYZ matrix")?;

    let matrices = RgbXyzMatrices { to_xyz, from_xyz };
    tracing::debug!(
        roundtrip_error = matrices.roundtrip_error(),
        "derived RGB to XYZ matrix\n{}",
        to_xyz
    );
    Ok(matrices)
}
