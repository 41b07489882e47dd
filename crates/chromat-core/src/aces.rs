//! Published ACES reference matrices
//!
//! The renderer's spectral code bakes these in as constants. They are all
//! written for column vectors (`rgb' = M × rgb`). The `derived_*` functions
//! rebuild the ones that follow from primaries, so the tables can be checked
//! against the derivation instead of trusted blindly.
//!
//! Sources:
//! - https://github.com/ampas/aces-dev/blob/master/transforms/ctl/README-MATRIX.md
//! - https://www.shadertoy.com/view/WltSRB

use crate::Result;
use crate::color::space::StandardSpace;
use crate::color::white_point;
use crate::math::{Matrix3x3, build_chromatic_adaptation};
use crate::transform::compose;

/// ACES `D60_2_D65_CAT` (Bradford, ACES white → D65)
pub const D60_TO_D65_CAT: Matrix3x3 = Matrix3x3::new([
    [0.987224, -0.00611327, 0.0159533],
    [-0.00759836, 1.00186, 0.00533002],
    [0.00307257, -0.00509595, 1.08168],
]);

/// sRGB → XYZ → D65_2_D60 → AP1
pub const SRGB_TO_AP1: Matrix3x3 = Matrix3x3::new([
    [0.613097, 0.339523, 0.047379],
    [0.070194, 0.916354, 0.013452],
    [0.020616, 0.109570, 0.869815],
]);

/// AP1 → D60_2_D65 → XYZ → sRGB
pub const AP1_TO_SRGB: Matrix3x3 = Matrix3x3::new([
    [1.70505155, -0.62179068, -0.0832584],
    [-0.13025714, 1.14080289, -0.01054853],
    [-0.02400328, -0.12896877, 1.15297171],
]);

/// XYZ (D65) → D65_2_D60 → AP1
pub const XYZ_TO_AP1: Matrix3x3 = Matrix3x3::new([
    [1.66058533, -0.31529556, -0.24150933],
    [-0.65992606, 1.60839147, 0.01729859],
    [0.00900257, -0.00356688, 0.91364331],
]);

/// RRT saturation adjustment in AP1
pub const AP1_TO_RRT_SAT: Matrix3x3 = Matrix3x3::new([
    [0.970889, 0.026963, 0.002148],
    [0.010889, 0.986963, 0.002148],
    [0.010889, 0.026963, 0.962148],
]);

/// sRGB → XYZ → D65_2_D60 → AP1 → RRT_SAT
pub const SRGB_TO_RRT_SAT: Matrix3x3 = Matrix3x3::new([
    [0.59719, 0.35458, 0.04823],
    [0.07600, 0.90834, 0.01566],
    [0.02840, 0.13383, 0.83777],
]);

/// ODT_SAT → XYZ → D60_2_D65 → sRGB
pub const ODT_SAT_TO_SRGB: Matrix3x3 = Matrix3x3::new([
    [1.60475, -0.53108, -0.07367],
    [-0.10208, 1.10813, -0.00605],
    [-0.00327, -0.07276, 1.07602],
]);

/// RRT saturation factor behind [`AP1_TO_RRT_SAT`]
pub const RRT_SAT_FACTOR: f64 = 0.96;

/// ODT saturation factor behind [`ODT_SAT_TO_SRGB`]
pub const ODT_SAT_FACTOR: f64 = 0.93;

/// Saturation adjustment that keeps luminance fixed
///
/// Each row is `sat × eᵢ + (1 - sat) × luma`, so neutral RGB (equal
/// components) maps to itself when `luma` sums to one.
pub fn saturation_matrix(sat: f64, luma: [f64; 3]) -> Matrix3x3 {
    let mut m = Matrix3x3::identity();
    for (i, row) in m.m.iter_mut().enumerate() {
        for (j, v) in row.iter_mut().enumerate() {
            let diagonal = if i == j { sat } else { 0.0 };
            *v = diagonal + (1.0 - sat) * luma[j];
        }
    }
    m
}

/// Rebuild [`ODT_SAT_TO_SRGB`]: ODT saturation in AP1, then the published AP1 → sRGB
pub fn derived_odt_sat_to_srgb() -> Result<Matrix3x3> {
    let luma = StandardSpace::Ap1.matrices()?.luminance_coefficients();
    Ok(compose(&[saturation_matrix(ODT_SAT_FACTOR, luma), AP1_TO_SRGB]))
}

/// Inverse of [`D60_TO_D65_CAT`]
pub fn d65_to_d60_cat() -> Result<Matrix3x3> {
    D60_TO_D65_CAT.try_inverse("inverting the ACES D60 to D65 CAT")
}

/// Rebuild [`XYZ_TO_AP1`]: Bradford D65 → ACES white, then XYZ → AP1
pub fn derived_xyz_to_ap1() -> Result<Matrix3x3> {
    let cat = build_chromatic_adaptation(
        white_point::D65.chromaticity,
        white_point::ACES.chromaticity,
    )?;
    let ap1 = StandardSpace::Ap1.matrices()?;
    Ok(compose(&[cat, ap1.from_xyz]))
}

/// Rebuild [`SRGB_TO_AP1`]: sRGB → XYZ, Bradford D65 → ACES white, XYZ → AP1
pub fn derived_srgb_to_ap1() -> Result<Matrix3x3> {
    let srgb = StandardSpace::Srgb.matrices()?;
    Ok(compose(&[srgb.to_xyz, derived_xyz_to_ap1()?]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_xyz_to_ap1() {
        let derived = derived_xyz_to_ap1().unwrap();
        assert!(derived.approx_eq(&XYZ_TO_AP1, 1e-6), "{derived}");
    }

    #[test]
    fn test_derived_srgb_to_ap1() {
        let derived = derived_srgb_to_ap1().unwrap();
        assert!(derived.approx_eq(&SRGB_TO_AP1, 1e-5), "{derived}");
    }

    #[test]
    fn test_published_pair_is_inverse() {
        let product = AP1_TO_SRGB.multiply(&SRGB_TO_AP1);
        assert!(product.is_identity(1e-5), "{product}");
    }

    #[test]
    fn test_cat_pair() {
        let inv = d65_to_d60_cat().unwrap();
        assert!(inv.multiply(&D60_TO_D65_CAT).is_identity(1e-12));
    }

    #[test]
    fn test_rrt_sat_composition() {
        // Published tables are rounded to 5 digits
        let composed = compose(&[SRGB_TO_AP1, AP1_TO_RRT_SAT]);
        assert!(composed.approx_eq(&SRGB_TO_RRT_SAT, 1e-4), "{composed}");
    }

    #[test]
    fn test_rrt_sat_from_factor() {
        let luma = StandardSpace::Ap1.matrices().unwrap().luminance_coefficients();
        let derived = saturation_matrix(RRT_SAT_FACTOR, luma);
        assert!(derived.approx_eq(&AP1_TO_RRT_SAT, 1e-5), "{derived}");
    }

    #[test]
    fn test_derived_odt_sat_to_srgb() {
        let derived = derived_odt_sat_to_srgb().unwrap();
        assert!(derived.approx_eq(&ODT_SAT_TO_SRGB, 1e-4), "{derived}");
    }

    #[test]
    fn test_odt_sat_keeps_neutral() {
        // Desaturation does not move neutrals, so both tables agree on grey
        let grey = [0.18, 0.18, 0.18];
        let via_odt = ODT_SAT_TO_SRGB.multiply_vec(grey);
        let direct = AP1_TO_SRGB.multiply_vec(grey);
        for i in 0..3 {
            assert!((via_odt[i] - direct[i]).abs() < 1e-4, "{via_odt:?} vs {direct:?}");
        }
    }

    #[test]
    fn test_saturation_matrix_identity_at_one() {
        let m = saturation_matrix(1.0, [0.2, 0.7, 0.1]);
        assert_eq!(m, Matrix3x3::identity());
    }

    #[test]
    fn test_rows_preserve_white() {
        // Equal-energy RGB stays neutral through the saturation matrix
        for row in AP1_TO_RRT_SAT.m {
            assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-5);
        }
    }
}
