//! CIE 1931 chromaticity coordinates
//!
//! A chromaticity `(x, y)` fixes a color's hue and saturation but not its
//! luminance. Converting it to XYZ therefore picks a luminance; here Y = 1:
//!
//! ```text
//! X = x / y,   Y = 1,   Z = (1 - x - y) / y
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Xyz;
use crate::{Error, Result};

/// A point on the CIE 1931 chromaticity diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

impl Chromaticity {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check that the coordinate can be converted to a tristimulus vector
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.y != 0.0
    }

    /// Convert to an XYZ tristimulus vector with Y = 1
    pub fn to_xyz(&self) -> Result<Xyz> {
        chromaticity_to_tristimulus(self.x, self.y)
    }
}

impl From<(f64, f64)> for Chromaticity {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Chromaticity {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Convert chromaticity `(x, y)` into the tristimulus vector `(x/y, 1, (1-x-y)/y)`
///
/// Fails with [`Error::InvalidChromaticity`] when `y == 0` or either coordinate
/// is not finite. The Y component of a successful result is exactly 1.
pub fn chromaticity_to_tristimulus(x: f64, y: f64) -> Result<Xyz> {
    let c = Chromaticity::new(x, y);
    if !c.is_valid() {
        return Err(Error::InvalidChromaticity { x, y });
    }

    let xyz = Xyz::new(x / y, 1.0, (1.0 - x - y) / y);

    // Finite inputs can still overflow for subnormal y
    if !(xyz.x.is_finite() && xyz.z.is_finite()) {
        return Err(Error::InvalidChromaticity { x, y });
    }
    Ok(xyz)
}
