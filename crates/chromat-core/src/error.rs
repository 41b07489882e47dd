//! Error types for chromat

use thiserror::Error;

/// Result type for chromat operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while deriving color transforms
///
/// Every error is fatal to the single derivation that produced it. Nothing is
/// retained between calls, so a failed call leaves no partial state behind.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Chromaticity has y = 0 or a non-finite coordinate
    #[error("Invalid chromaticity ({x}, {y}): y must be non-zero and both coordinates finite")]
    InvalidChromaticity { x: f64, y: f64 },

    /// A matrix that must be inverted has a (near-)zero determinant
    #[error("Singular matrix while {context}")]
    SingularMatrix { context: &'static str },

    /// Source or destination white has a zero response in one cone channel
    #[error("Degenerate white point: zero cone response in channel {channel}")]
    DegenerateWhitePoint { channel: usize },

    /// No color space with this name
    #[error("Unknown color space: {0}")]
    UnknownColorSpace(String),

    /// No white point with this name
    #[error("Unknown white point: {0}")]
    UnknownWhitePoint(String),

    /// No chromatic adaptation method with this name
    #[error("Unknown adaptation method: {0}")]
    UnknownAdaptationMethod(String),
}
