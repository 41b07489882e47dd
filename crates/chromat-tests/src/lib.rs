//! # chromat-tests
//!
//! Reference-value testing support for chromat.
//!
//! This crate provides:
//! - Published RGB ↔ XYZ tables to compare derived matrices against
//! - Element-wise accuracy statistics for matrix comparisons
//! - Seeded generators for random, non-degenerate primaries
//!
//! ## Test Categories
//!
//! 1. **Reference matrices**: derived matrices vs published tables
//! 2. **Properties**: round-trip, identity adaptation, associativity
//! 3. **Reports**: JSON shape of transform reports

pub mod accuracy;
pub mod reference;
pub mod sampling;

pub use accuracy::{MatrixDiffStats, compare_matrices};
pub use reference::{ReferenceMatrix, reference_matrices};
