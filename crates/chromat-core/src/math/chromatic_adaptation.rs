//! Chromatic Adaptation Transforms
//!
//! A chromatic adaptation transform (CAT) converts tristimulus values measured
//! under one white point into the values that look the same under another.
//! Both whites are projected into a cone-response space by a basis matrix
//! `B`, each cone channel is scaled by the ratio of the two responses, and the
//! result is projected back:
//!
//! ```text
//! A = B⁻¹ × diag(ρ_dst / ρ_src) × B,    xyz_dst = A × xyz_src
//! ```
//!
//! References:
//! - Lindbloom: http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html
//! - ACES: ACESlib.Utilities_Color.ctl (`calculate_cat_matrix`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Chromaticity, Xyz};
use crate::math::Matrix3x3;
use crate::{Error, Result};

/// Cone responses smaller than this are treated as zero
const CONE_EPSILON: f64 = 1e-12;

/// Chromatic adaptation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChromaticAdaptationMethod {
    /// Bradford adaptation (ICC and ACES default)
    #[default]
    Bradford,
    /// Von Kries adaptation
    VonKries,
    /// CIECAM02 adaptation
    Cat02,
    /// Scale X, Y, Z independently
    XyzScaling,
    /// No adaptation (identity)
    None,
}

// ============================================================================
// Cone-response bases (XYZ → LMS, column convention)
// ============================================================================

/// Bradford basis, exactly as published
pub const BRADFORD: Matrix3x3 = Matrix3x3::new([
    [0.8951000, 0.2664000, -0.1614000],
    [-0.7502000, 1.7135000, 0.0367000],
    [0.0389000, -0.0685000, 1.0296000],
]);

/// Von Kries (Hunt-Pointer-Estevez) basis
pub const VON_KRIES: Matrix3x3 = Matrix3x3::new([
    [0.4002400, 0.7076000, -0.0808100],
    [-0.2263000, 1.1653200, 0.0457000],
    [0.0000000, 0.0000000, 0.9182200],
]);

/// CIECAM02 basis
pub const CAT02: Matrix3x3 = Matrix3x3::new([
    [0.7328000, 0.4296000, -0.1624000],
    [-0.7036000, 1.6975000, 0.0061000],
    [0.0030000, 0.0136000, 0.9834000],
]);

impl ChromaticAdaptationMethod {
    /// Cone-response basis of this method, or None for [`Self::None`]
    pub fn basis(&self) -> Option<Matrix3x3> {
        match self {
            Self::Bradford => Some(BRADFORD),
            Self::VonKries => Some(VON_KRIES),
            Self::Cat02 => Some(CAT02),
            Self::XyzScaling => Some(Matrix3x3::identity()),
            Self::None => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bradford => "Bradford",
            Self::VonKries => "Von Kries",
            Self::Cat02 => "CAT02",
            Self::XyzScaling => "XYZ scaling",
            Self::None => "none",
        }
    }
}

impl fmt::Display for ChromaticAdaptationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChromaticAdaptationMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "bradford" => Ok(Self::Bradford),
            "von-kries" | "vonkries" => Ok(Self::VonKries),
            "cat02" => Ok(Self::Cat02),
            "xyz-scaling" | "xyz" => Ok(Self::XyzScaling),
            "none" => Ok(Self::None),
            _ => Err(Error::UnknownAdaptationMethod(s.to_string())),
        }
    }
}

/// Compute the adaptation matrix from `src_white` to `dst_white`
///
/// The returned matrix A is used as `xyz_dst = A × xyz_src`.
pub fn adaptation_matrix(
    src_white: Chromaticity,
    dst_white: Chromaticity,
    method: ChromaticAdaptationMethod,
) -> Result<Matrix3x3> {
    let src = src_white.to_xyz()?;
    let dst = dst_white.to_xyz()?;

    let Some(basis) = method.basis() else {
        return Ok(Matrix3x3::identity());
    };
    let basis_inv = basis.try_inverse("inverting the cone-response basis")?;

    let src_lms = basis.multiply_vec(src.to_array());
    let dst_lms = basis.multiply_vec(dst.to_array());
    tracing::trace!(?src_lms, ?dst_lms, %method, "cone responses");

    let mut gain = [0.0; 3];
    for (channel, g) in gain.iter_mut().enumerate() {
        // Zero on either side leaves the gain undefined or the matrix singular
        if src_lms[channel].abs() < CONE_EPSILON || dst_lms[channel].abs() < CONE_EPSILON {
            return Err(Error::DegenerateWhitePoint { channel });
        }
        *g = dst_lms[channel] / src_lms[channel];
    }

    let scale = Matrix3x3::diagonal(gain[0], gain[1], gain[2]);
    let matrix = basis_inv.multiply(&scale.multiply(&basis));
    tracing::debug!(%method, "derived adaptation matrix\n{}", matrix);
    Ok(matrix)
}

/// Bradford adaptation matrix from `src_white` to `dst_white`
///
/// Equal whites yield the identity (to rounding).
#[inline]
pub fn build_chromatic_adaptation(
    src_white: Chromaticity,
    dst_white: Chromaticity,
) -> Result<Matrix3x3> {
    adaptation_matrix(src_white, dst_white, ChromaticAdaptationMethod::Bradford)
}

/// Adapt an XYZ color from one white point to another
pub fn adapt_xyz(
    xyz: Xyz,
    src_white: Chromaticity,
    dst_white: Chromaticity,
    method: ChromaticAdaptationMethod,
) -> Result<Xyz> {
    let matrix = adaptation_matrix(src_white, dst_white, method)?;
    Ok(xyz.transform(&matrix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::white_point::{ACES, D50, D65, E};

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_identity_adaptation() {
        for wp in [D50, ACES, D65, E] {
            let matrix = build_chromatic_adaptation(wp.chromaticity, wp.chromaticity).unwrap();
            assert!(matrix.is_identity(EPSILON), "{}: {:?}", wp.name, matrix);
        }
    }

    #[test]
    fn test_aces_to_d65_matches_published() {
        // ACES D60_2_D65_CAT, written out for column vectors
        let published = Matrix3x3::new([
            [0.987224, -0.00611327, 0.0159533],
            [-0.00759836, 1.00186, 0.00533002],
            [0.00307257, -0.00509595, 1.08168],
        ]);
        let computed = build_chromatic_adaptation(ACES.chromaticity, D65.chromaticity).unwrap();
        assert!(
            computed.approx_eq(&published, 1e-5),
            "computed={computed:?} expected={published:?}"
        );
    }

    #[test]
    fn test_adaptation_roundtrip() {
        let m1 = build_chromatic_adaptation(D65.chromaticity, D50.chromaticity).unwrap();
        let m2 = build_chromatic_adaptation(D50.chromaticity, D65.chromaticity).unwrap();
        assert!(m1.multiply(&m2).is_identity(1e-9));
    }

    #[test]
    fn test_white_point_adaptation() {
        // Source white lands on destination white for every method
        let d65 = D65.xyz().unwrap();
        let aces = ACES.xyz().unwrap();
        for method in [
            ChromaticAdaptationMethod::Bradford,
            ChromaticAdaptationMethod::VonKries,
            ChromaticAdaptationMethod::Cat02,
            ChromaticAdaptationMethod::XyzScaling,
        ] {
            let adapted = adapt_xyz(d65, D65.chromaticity, ACES.chromaticity, method).unwrap();
            assert!(adapted.approx_eq(&aces, 1e-9), "{method}: {adapted:?} vs {aces:?}");
        }
    }

    #[test]
    fn test_xyz_scaling_is_diagonal() {
        let matrix = adaptation_matrix(
            D65.chromaticity,
            D50.chromaticity,
            ChromaticAdaptationMethod::XyzScaling,
        )
        .unwrap();

        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    assert!(matrix.m[i][j].abs() < EPSILON);
                }
            }
        }
    }

    #[test]
    fn test_none_is_identity() {
        let matrix =
            adaptation_matrix(D65.chromaticity, D50.chromaticity, ChromaticAdaptationMethod::None)
                .unwrap();
        assert_eq!(matrix, Matrix3x3::identity());
    }

    #[test]
    fn test_invalid_white_rejected() {
        let bad = Chromaticity::new(0.3, 0.0);
        assert!(build_chromatic_adaptation(bad, D65.chromaticity).is_err());
        assert!(build_chromatic_adaptation(D65.chromaticity, bad).is_err());
        // Validated even when no adaptation is requested
        assert!(adaptation_matrix(bad, bad, ChromaticAdaptationMethod::None).is_err());
    }

    /// White whose first Bradford cone response is zero:
    /// 0.8951 X + 0.2664 Y - 0.1614 Z = 0 with Y = 1 and Z = 0
    fn zero_long_cone_white() -> Chromaticity {
        let x = -0.2664 / 0.8951;
        // X = x/y, Z = (1-x-y)/y = 0  =>  y = 1 - x (in chromaticity terms)
        Chromaticity::new(x / (1.0 + x), 1.0 / (1.0 + x))
    }

    #[test]
    fn test_degenerate_cone_response() {
        let result = build_chromatic_adaptation(zero_long_cone_white(), D65.chromaticity);
        assert!(matches!(result, Err(Error::DegenerateWhitePoint { channel: 0 })));
    }

    #[test]
    fn test_degenerate_destination_cone_response() {
        // Would otherwise zero the channel gain and yield a singular matrix
        let result = build_chromatic_adaptation(D65.chromaticity, zero_long_cone_white());
        assert!(matches!(result, Err(Error::DegenerateWhitePoint { channel: 0 })));

        // White with Z = 0: the XYZ scaling gain for Z would be zero
        let z_free = Chromaticity::new(0.4, 0.6);
        let result =
            adaptation_matrix(D65.chromaticity, z_free, ChromaticAdaptationMethod::XyzScaling);
        assert!(matches!(result, Err(Error::DegenerateWhitePoint { channel: 2 })));
    }

    #[test]
    fn test_parse_method() {
        assert_eq!("bradford".parse(), Ok(ChromaticAdaptationMethod::Bradford));
        assert_eq!("Von_Kries".parse(), Ok(ChromaticAdaptationMethod::VonKries));
        assert_eq!("CAT02".parse(), Ok(ChromaticAdaptationMethod::Cat02));
        assert_eq!("xyz-scaling".parse(), Ok(ChromaticAdaptationMethod::XyzScaling));
        assert!("sharp".parse::<ChromaticAdaptationMethod>().is_err());
    }
}
