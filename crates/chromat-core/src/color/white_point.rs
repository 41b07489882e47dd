//! Reference white points
//!
//! White points are defined by their chromaticity, which is what color space
//! standards publish. The tristimulus vector (Y = 1) is derived on demand.

use serde::Serialize;

use crate::color::{Chromaticity, Xyz};
use crate::{Error, Result};

/// A named reference white
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WhitePoint {
    /// Name of the illuminant
    pub name: &'static str,
    /// CIE 1931 chromaticity
    pub chromaticity: Chromaticity,
}

impl WhitePoint {
    pub const fn new(name: &'static str, x: f64, y: f64) -> Self {
        Self {
            name,
            chromaticity: Chromaticity::new(x, y),
        }
    }

    /// Tristimulus vector of this white with Y = 1
    pub fn xyz(&self) -> Result<Xyz> {
        self.chromaticity.to_xyz()
    }
}

// ============================================================================
// Standard illuminants
// ============================================================================

/// CIE D50, the ICC profile connection space white
pub const D50: WhitePoint = WhitePoint::new("D50", 0.3457, 0.3585);

/// ACES white point (~D60), as given in SMPTE ST 2065-1
pub const ACES: WhitePoint = WhitePoint::new("ACES", 0.32168, 0.33767);

/// CIE D65, the white of sRGB, BT.709, BT.2020 and Display P3
///
/// Four-digit values from IEC 61966-2-1 / ITU-R BT.709-6.
pub const D65: WhitePoint = WhitePoint::new("D65", 0.3127, 0.3290);

/// Equal-energy illuminant
pub const E: WhitePoint = WhitePoint::new("E", 1.0 / 3.0, 1.0 / 3.0);

/// DCI-P3 theatrical white (slightly greenish)
pub const DCI: WhitePoint = WhitePoint::new("DCI", 0.314, 0.351);

/// Every named white point, for lookup and listing
pub const ALL: [WhitePoint; 5] = [D50, ACES, D65, E, DCI];

/// Get a standard white point by name (case-insensitive)
///
/// `D60` is accepted as an alias of [`ACES`].
pub fn from_name(name: &str) -> Result<WhitePoint> {
    match name.to_ascii_uppercase().as_str() {
        "D50" => Ok(D50),
        "ACES" | "D60" => Ok(ACES),
        "D65" => Ok(D65),
        "E" => Ok(E),
        "DCI" | "DCI-P3" => Ok(DCI),
        _ => Err(Error::UnknownWhitePoint(name.to_string())),
    }
}
