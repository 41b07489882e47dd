//! Transform composition
//!
//! A chain lists matrices in the order they are applied to a column vector:
//! `compose(&[a, b, c])` is the matrix `c × b × a`, so RGB → XYZ → CAT → RGB
//! reads left to right exactly as the data flows.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::color::Chromaticity;
use crate::color::space::{ColorSpace, StandardSpace};
use crate::math::{ChromaticAdaptationMethod, Matrix3x3, RgbXyzMatrices, adaptation_matrix};

/// Combine matrices applied in sequence into one
///
/// `matrices[0]` is applied first. An empty chain is the identity.
pub fn compose(matrices: &[Matrix3x3]) -> Matrix3x3 {
    matrices
        .iter()
        .fold(Matrix3x3::identity(), |acc, m| m.multiply(&acc))
}

/// One labelled stage of a [`TransformChain`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformStep {
    pub label: String,
    pub matrix: Matrix3x3,
}

/// An ordered list of labelled matrices
///
/// The chain is a value: [`TransformChain::then`] consumes it and returns the
/// extended chain, and every query returns freshly computed data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformChain {
    steps: Vec<TransformStep>,
}

impl TransformChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step applied after all existing ones
    pub fn then(mut self, label: impl Into<String>, matrix: Matrix3x3) -> Self {
        self.steps.push(TransformStep {
            label: label.into(),
            matrix,
        });
        self
    }

    /// Linear RGB in `src` → linear RGB in `dst`
    ///
    /// Goes through XYZ. When the two whites differ and `method` is not
    /// [`ChromaticAdaptationMethod::None`], an adaptation step from the source
    /// white to the destination white sits between the two halves.
    pub fn rgb_to_rgb(
        src: &ColorSpace,
        dst: &ColorSpace,
        method: ChromaticAdaptationMethod,
    ) -> Result<Self> {
        let src_matrices = src.rgb_to_xyz()?;
        let dst_matrices = dst.rgb_to_xyz()?;
        Self::from_parts(
            (src.name.as_str(), &src_matrices, src.white()),
            (dst.name.as_str(), &dst_matrices, dst.white()),
            method,
        )
    }

    /// Same as [`TransformChain::rgb_to_rgb`], reusing memoized matrices
    pub fn between_standard(
        src: StandardSpace,
        dst: StandardSpace,
        method: ChromaticAdaptationMethod,
    ) -> Result<Self> {
        Self::from_parts(
            (src.name(), src.matrices()?, src.primaries().white),
            (dst.name(), dst.matrices()?, dst.primaries().white),
            method,
        )
    }

    fn from_parts(
        (src_name, src, src_white): (&str, &RgbXyzMatrices, Chromaticity),
        (dst_name, dst, dst_white): (&str, &RgbXyzMatrices, Chromaticity),
        method: ChromaticAdaptationMethod,
    ) -> Result<Self> {
        let mut chain = Self::new().then(format!("{src_name} → XYZ"), src.to_xyz);

        if src_white != dst_white && method != ChromaticAdaptationMethod::None {
            let cat = adaptation_matrix(src_white, dst_white, method)?;
            chain = chain.then(
                format!(
                    "{method} ({:.5}, {:.5}) → ({:.5}, {:.5})",
                    src_white.x, src_white.y, dst_white.x, dst_white.y
                ),
                cat,
            );
        }

        let chain = chain.then(format!("XYZ → {dst_name}"), dst.from_xyz);
        tracing::debug!(
            src = src_name,
            dst = dst_name,
            %method,
            steps = chain.steps.len(),
            "built RGB to RGB chain"
        );
        Ok(chain)
    }

    pub fn steps(&self) -> &[TransformStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All steps combined into a single matrix
    pub fn matrix(&self) -> Matrix3x3 {
        let matrices: Vec<Matrix3x3> = self.steps.iter().map(|s| s.matrix).collect();
        compose(&matrices)
    }

    /// Apply the combined transform to a column vector
    pub fn apply(&self, v: [f64; 3]) -> [f64; 3] {
        self.matrix().multiply_vec(v)
    }

    /// Snapshot of every step plus the combined matrix and its inverse
    pub fn report(&self) -> TransformReport {
        let combined = self.matrix();
        TransformReport {
            steps: self.steps.clone(),
            combined,
            inverse: combined.inverse(),
        }
    }
}

/// Inspection record of a chain, suitable for logging or JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformReport {
    pub steps: Vec<TransformStep>,
    pub combined: Matrix3x3,
    /// None when the combined matrix is singular
    pub inverse: Option<Matrix3x3>,
}

impl fmt::Display for TransformReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(8);
        for step in &self.steps {
            writeln!(f, "{}", step.label)?;
            writeln!(f, "{:.*}", precision, step.matrix)?;
            writeln!(f)?;
        }
        writeln!(f, "Combined")?;
        write!(f, "{:.*}", precision, self.combined)?;
        if let Some(inverse) = &self.inverse {
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "Inverse")?;
            write!(f, "{:.*}", precision, inverse)?;
        }
        Ok(())
    }
}
