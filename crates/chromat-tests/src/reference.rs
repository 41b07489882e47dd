//! Published RGB ↔ XYZ reference tables
//!
//! Each entry pairs a standard space with the matrices its defining document
//! (or a widely used derivation of it) publishes. Tolerances reflect how many
//! digits were published and which white point tristimulus the publisher used.

use chromat_core::{Matrix3x3, StandardSpace};

/// A published matrix pair for one standard space
#[derive(Debug, Clone, Copy)]
pub struct ReferenceMatrix {
    pub space: StandardSpace,
    pub to_xyz: Matrix3x3,
    pub from_xyz: Matrix3x3,
    /// Largest element-wise difference accepted against a derived matrix
    pub tolerance: f64,
    pub source: &'static str,
}

/// sRGB → XYZ, Lindbloom (white XYZ 0.95047, 1, 1.08883)
pub const SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ → sRGB, Lindbloom
pub const XYZ_TO_SRGB: Matrix3x3 = Matrix3x3::new([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// AP1 → XYZ, ACES README-MATRIX
pub const AP1_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.6624541811, 0.1340042065, 0.1561876870],
    [0.2722287168, 0.6740817658, 0.0536895174],
    [-0.0055746495, 0.0040607335, 1.0103391003],
]);

/// XYZ → AP1, ACES README-MATRIX
///
/// XYZ is relative to the ACES white, with no adaptation. Not to be confused
/// with `chromat_core::aces::XYZ_TO_AP1`, which expects D65-relative XYZ.
pub const XYZ_TO_AP1_ACES_WHITE: Matrix3x3 = Matrix3x3::new([
    [1.6410233797, -0.3248032942, -0.2364246952],
    [-0.6636628587, 1.6153315917, 0.0167563477],
    [0.0117218943, -0.0082844420, 0.9883948585],
]);

/// AP0 → XYZ, SMPTE ST 2065-1
pub const AP0_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.9525523959, 0.0000000000, 0.0000936786],
    [0.3439664498, 0.7281660966, -0.0721325464],
    [0.0000000000, 0.0000000000, 1.0088251844],
]);

/// XYZ → AP0, SMPTE ST 2065-1
pub const XYZ_TO_AP0: Matrix3x3 = Matrix3x3::new([
    [1.0498110175, 0.0000000000, -0.0000974845],
    [-0.4959030231, 1.3733130458, 0.0982400361],
    [0.0000000000, 0.0000000000, 0.9912520182],
]);

/// Display P3 → XYZ
pub const DISPLAY_P3_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.4865709, 0.2656677, 0.1982173],
    [0.2289746, 0.6917385, 0.0792869],
    [0.0000000, 0.0451134, 1.0439444],
]);

/// XYZ → Display P3
pub const XYZ_TO_DISPLAY_P3: Matrix3x3 = Matrix3x3::new([
    [2.4934969, -0.9313836, -0.4027108],
    [-0.8294890, 1.7626641, 0.0236247],
    [0.0358458, -0.0761724, 0.9568845],
]);

/// BT.2020 → XYZ
pub const BT2020_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.6369580, 0.1446169, 0.1688810],
    [0.2627002, 0.6779981, 0.0593017],
    [0.0000000, 0.0280727, 1.0609851],
]);

/// XYZ → BT.2020
pub const XYZ_TO_BT2020: Matrix3x3 = Matrix3x3::new([
    [1.7166512, -0.3556708, -0.2533663],
    [-0.6666844, 1.6164812, 0.0157685],
    [0.0176399, -0.0427706, 0.9421031],
]);

/// All published tables with their acceptance tolerance
pub fn reference_matrices() -> [ReferenceMatrix; 5] {
    [
        ReferenceMatrix {
            space: StandardSpace::Srgb,
            to_xyz: SRGB_TO_XYZ,
            from_xyz: XYZ_TO_SRGB,
            // Lindbloom uses a 5-digit D65 tristimulus, not the 4-digit chromaticity
            tolerance: 1e-3,
            source: "Lindbloom RGB/XYZ matrices",
        },
        ReferenceMatrix {
            space: StandardSpace::Ap1,
            to_xyz: AP1_TO_XYZ,
            from_xyz: XYZ_TO_AP1_ACES_WHITE,
            tolerance: 1e-8,
            source: "ACES README-MATRIX",
        },
        ReferenceMatrix {
            space: StandardSpace::Ap0,
            to_xyz: AP0_TO_XYZ,
            from_xyz: XYZ_TO_AP0,
            tolerance: 1e-8,
            source: "SMPTE ST 2065-1",
        },
        ReferenceMatrix {
            space: StandardSpace::DisplayP3,
            to_xyz: DISPLAY_P3_TO_XYZ,
            from_xyz: XYZ_TO_DISPLAY_P3,
            tolerance: 1e-6,
            source: "Display P3 (D65)",
        },
        ReferenceMatrix {
            space: StandardSpace::Rec2020,
            to_xyz: BT2020_TO_XYZ,
            from_xyz: XYZ_TO_BT2020,
            tolerance: 1e-6,
            source: "ITU-R BT.2020",
        },
    ]
}
