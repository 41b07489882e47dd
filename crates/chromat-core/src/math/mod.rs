//! Mathematical core of chromat
//!
//! - 3x3 matrix operations (column-vector convention)
//! - RGB ↔ XYZ derivation from primaries
//! - Chromatic adaptation (Bradford, Von Kries, CAT02)

pub mod chromatic_adaptation;
pub mod matrix;
pub mod primaries;

pub use chromatic_adaptation::{
    ChromaticAdaptationMethod, adapt_xyz, adaptation_matrix, build_chromatic_adaptation,
};
pub use matrix::Matrix3x3;
pub use primaries::{RgbXyzMatrices, build_rgb_to_xyz};
