//! # chromat - colorimetric transform derivation
//!
//! Derives the linear maps between RGB color spaces and CIE XYZ from the
//! chromaticities of their primaries and white point, plus chromatic
//! adaptation transforms between white points.
//!
//! All matrices use column vectors: `v' = M × v`. Chains list matrices in the
//! order they are applied.
//!
//! ## Quick Start
//!
//! ```
//! use chromat_core::{ChromaticAdaptationMethod, StandardSpace, TransformChain};
//!
//! // sRGB → XYZ → Bradford D65 → ACES white → AP1
//! let chain = TransformChain::between_standard(
//!     StandardSpace::Srgb,
//!     StandardSpace::Ap1,
//!     ChromaticAdaptationMethod::Bradford,
//! )?;
//!
//! let ap1 = chain.apply([1.0, 1.0, 1.0]);
//! assert!((ap1[0] - 1.0).abs() < 1e-9);
//! println!("{}", chain.report());
//! # Ok::<(), chromat_core::Error>(())
//! ```
//!
//! Arbitrary primaries go through [`build_rgb_to_xyz`]:
//!
//! ```
//! use chromat_core::{Chromaticity, build_rgb_to_xyz};
//!
//! let m = build_rgb_to_xyz(
//!     Chromaticity::new(0.64, 0.33),
//!     Chromaticity::new(0.30, 0.60),
//!     Chromaticity::new(0.15, 0.06),
//!     Chromaticity::new(0.3127, 0.3290),
//! )?;
//! assert!(m.roundtrip_error() < 1e-9);
//! # Ok::<(), chromat_core::Error>(())
//! ```

pub mod aces;
pub mod color;
pub mod error;
pub mod math;
pub mod transform;

pub use color::{
    Chromaticity, ColorSpace, Primaries, StandardSpace, WhitePoint, Xyz,
    chromaticity_to_tristimulus, white_point,
};
pub use error::{Error, Result};
pub use math::{
    ChromaticAdaptationMethod, Matrix3x3, RgbXyzMatrices, adapt_xyz, adaptation_matrix,
    build_chromatic_adaptation, build_rgb_to_xyz,
};
pub use transform::{TransformChain, TransformReport, TransformStep, compose};

/// Version of chromat
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
