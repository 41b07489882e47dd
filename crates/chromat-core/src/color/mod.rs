//! Colorimetric value types
//!
//! This module provides:
//! - CIE 1931 chromaticity coordinates
//! - CIE XYZ tristimulus vectors
//! - White point definitions
//! - RGB color space descriptors

pub mod chromaticity;
pub mod space;
pub mod white_point;
pub mod xyz;

pub use chromaticity::{Chromaticity, chromaticity_to_tristimulus};
pub use space::{ColorSpace, Primaries, StandardSpace};
pub use white_point::WhitePoint;
pub use xyz::Xyz;
