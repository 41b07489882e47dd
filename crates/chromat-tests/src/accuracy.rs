//! Accuracy measurement for derived matrices
//!
//! Published tables are rounded to 4-10 significant digits, so comparisons
//! are made against a tolerance and the worst element is reported.

use chromat_core::Matrix3x3;

/// Statistics from an element-wise matrix comparison
#[derive(Debug, Clone, Copy)]
pub struct MatrixDiffStats {
    /// Mean absolute difference over the nine elements
    pub mean: f64,
    /// Maximum absolute difference
    pub max: f64,
    /// (row, col) of the maximum difference
    pub worst: (usize, usize),
}

impl MatrixDiffStats {
    /// Check if every element is within `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max <= tolerance
    }
}

/// Compare two matrices element by element
pub fn compare_matrices(actual: &Matrix3x3, expected: &Matrix3x3) -> MatrixDiffStats {
    let mut sum = 0.0;
    let mut max = 0.0;
    let mut worst = (0, 0);

    for i in 0..3 {
        for j in 0..3 {
            let diff = (actual[i][j] - expected[i][j]).abs();
            sum += diff;
            if diff > max {
                max = diff;
                worst = (i, j);
            }
        }
    }

    MatrixDiffStats {
        mean: sum / 9.0,
        max,
        worst,
    }
}
