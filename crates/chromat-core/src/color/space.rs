//! RGB color space descriptors
//!
//! A color space is fully described by the chromaticities of its three
//! primaries and its reference white. Named spaces are compile-time constants
//! whose derived matrices are computed once per process and then shared.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::color::{Chromaticity, white_point};
use crate::math::{RgbXyzMatrices, build_rgb_to_xyz};
use crate::{Error, Result};

/// Primaries and white point of an RGB space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Primaries {
    pub red: Chromaticity,
    pub green: Chromaticity,
    pub blue: Chromaticity,
    pub white: Chromaticity,
}

impl Primaries {
    pub const fn new(
        red: (f64, f64),
        green: (f64, f64),
        blue: (f64, f64),
        white: Chromaticity,
    ) -> Self {
        Self {
            red: Chromaticity::new(red.0, red.1),
            green: Chromaticity::new(green.0, green.1),
            blue: Chromaticity::new(blue.0, blue.1),
            white,
        }
    }

    /// Derive the RGB ↔ XYZ matrix pair
    pub fn rgb_to_xyz(&self) -> Result<RgbXyzMatrices> {
        build_rgb_to_xyz(self.red, self.green, self.blue, self.white)
    }
}

/// A named color space descriptor, as loaded from configuration
///
/// ```json
/// { "name": "AP1",
///   "red": { "x": 0.713, "y": 0.293 }, "green": { "x": 0.165, "y": 0.83 },
///   "blue": { "x": 0.128, "y": 0.044 }, "white": { "x": 0.32168, "y": 0.33767 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSpace {
    pub name: String,
    #[serde(flatten)]
    pub primaries: Primaries,
}

impl ColorSpace {
    pub fn new(name: impl Into<String>, primaries: Primaries) -> Self {
        Self {
            name: name.into(),
            primaries,
        }
    }

    /// Derive the RGB ↔ XYZ matrix pair (not memoized)
    pub fn rgb_to_xyz(&self) -> Result<RgbXyzMatrices> {
        let _span = tracing::debug_span!("rgb_to_xyz", space = %self.name).entered();
        self.primaries.rgb_to_xyz()
    }

    #[inline]
    pub fn white(&self) -> Chromaticity {
        self.primaries.white
    }
}

// ============================================================================
// Standard spaces
// ============================================================================

/// ACES AP0 (ACES2065-1), SMPTE ST 2065-1
pub const AP0: Primaries = Primaries::new(
    (0.7347, 0.2653),
    (0.0000, 1.0000),
    (0.0001, -0.0770),
    white_point::ACES.chromaticity,
);

/// ACES AP1 (ACEScg, ACEScc, ACEScct)
pub const AP1: Primaries = Primaries::new(
    (0.713, 0.293),
    (0.165, 0.830),
    (0.128, 0.044),
    white_point::ACES.chromaticity,
);

/// sRGB / ITU-R BT.709
pub const SRGB: Primaries = Primaries::new(
    (0.64, 0.33),
    (0.30, 0.60),
    (0.15, 0.06),
    white_point::D65.chromaticity,
);

/// ITU-R BT.2020
pub const REC2020: Primaries = Primaries::new(
    (0.708, 0.292),
    (0.170, 0.797),
    (0.131, 0.046),
    white_point::D65.chromaticity,
);

/// Display P3 (DCI-P3 primaries, D65 white)
pub const DISPLAY_P3: Primaries = Primaries::new(
    (0.680, 0.320),
    (0.265, 0.690),
    (0.150, 0.060),
    white_point::D65.chromaticity,
);

/// Color spaces with built-in, memoized matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StandardSpace {
    Ap0,
    Ap1,
    Srgb,
    Rec2020,
    DisplayP3,
}

static MATRICES: [OnceLock<Result<RgbXyzMatrices>>; StandardSpace::ALL.len()] =
    [const { OnceLock::new() }; StandardSpace::ALL.len()];

impl StandardSpace {
    pub const ALL: [StandardSpace; 5] = [
        StandardSpace::Ap0,
        StandardSpace::Ap1,
        StandardSpace::Srgb,
        StandardSpace::Rec2020,
        StandardSpace::DisplayP3,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ap0 => "AP0",
            Self::Ap1 => "AP1",
            Self::Srgb => "sRGB",
            Self::Rec2020 => "Rec.2020",
            Self::DisplayP3 => "Display P3",
        }
    }

    pub const fn primaries(&self) -> Primaries {
        match self {
            Self::Ap0 => AP0,
            Self::Ap1 => AP1,
            Self::Srgb => SRGB,
            Self::Rec2020 => REC2020,
            Self::DisplayP3 => DISPLAY_P3,
        }
    }

    pub fn descriptor(&self) -> ColorSpace {
        ColorSpace::new(self.name(), self.primaries())
    }

    /// RGB ↔ XYZ matrices, derived on first use and shared afterwards
    pub fn matrices(&self) -> Result<&'static RgbXyzMatrices> {
        MATRICES[*self as usize]
            .get_or_init(|| self.descriptor().rgb_to_xyz())
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl fmt::Display for StandardSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StandardSpace {
    type Err = Error;

    /// Case-insensitive; accepts common aliases such as `acescg` or `bt709`
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | '.' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "ap0" | "aces20651" | "aces" => Ok(Self::Ap0),
            "ap1" | "acescg" => Ok(Self::Ap1),
            "srgb" | "bt709" | "rec709" => Ok(Self::Srgb),
            "rec2020" | "bt2020" => Ok(Self::Rec2020),
            "displayp3" | "p3" => Ok(Self::DisplayP3),
            _ => Err(Error::UnknownColorSpace(s.to_string())),
        }
    }
}
